//! Days-of-the-week selection stored as a seven-bit mask.
//! Hosts embed [`WeekMask`] as a field and persist it through [`load`]/[`dump`].

pub mod logging;
pub mod model;
pub mod persist;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::day_ref::DayRef;
pub use model::week_mask::{WeekMask, MAX_VALUE};
pub use model::weekday::{ParseWeekdayError, Weekday};
pub use persist::{dump, load};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
