//! Weekday selection model.
//!
//! # Responsibility
//! - Define the `WeekMask` value type and the day tokens it is indexed by.
//! - Keep day identifier coercion in one closed conversion.
//!
//! # Invariants
//! - Bit `2^n` is the day with Sunday-first index `n`; the table is fixed.

pub mod day_ref;
mod occurrence;
pub mod week_mask;
pub mod weekday;
