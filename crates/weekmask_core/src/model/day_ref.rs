//! Day identifier coercion.
//!
//! Every index-based mask accessor funnels its argument through [`DayRef`],
//! so the set of accepted identifier shapes is closed and lives in one place.

use crate::model::weekday::Weekday;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// Anything a caller may use to name a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayRef {
    /// Already a token.
    Day(Weekday),
    /// Weekday index, valid in `0..=6`.
    Index(i64),
    /// Day name or integer text.
    Text(String),
    /// Weekday reported by a date/time value.
    Calendar(chrono::Weekday),
}

impl DayRef {
    /// Resolves this identifier to a day, or `None` when it names no day.
    pub fn resolve(&self) -> Option<Weekday> {
        match self {
            Self::Day(day) => Some(*day),
            Self::Index(index) => Weekday::from_index(*index),
            Self::Text(text) => text.parse().ok(),
            Self::Calendar(day) => Some(Weekday::from(*day)),
        }
    }
}

impl From<Weekday> for DayRef {
    fn from(value: Weekday) -> Self {
        Self::Day(value)
    }
}

impl From<&Weekday> for DayRef {
    fn from(value: &Weekday) -> Self {
        Self::Day(*value)
    }
}

impl From<&str> for DayRef {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DayRef {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<chrono::Weekday> for DayRef {
    fn from(value: chrono::Weekday) -> Self {
        Self::Calendar(value)
    }
}

impl From<NaiveDate> for DayRef {
    fn from(value: NaiveDate) -> Self {
        Self::Calendar(value.weekday())
    }
}

impl From<&NaiveDate> for DayRef {
    fn from(value: &NaiveDate) -> Self {
        Self::Calendar(value.weekday())
    }
}

impl From<NaiveDateTime> for DayRef {
    fn from(value: NaiveDateTime) -> Self {
        Self::Calendar(value.weekday())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DayRef {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Calendar(value.weekday())
    }
}

macro_rules! day_ref_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DayRef {
                fn from(value: $ty) -> Self {
                    // Values beyond i64 can never be a valid index.
                    Self::Index(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

day_ref_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
