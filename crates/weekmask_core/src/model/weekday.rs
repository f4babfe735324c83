//! Weekday tokens and their fixed bit positions.
//!
//! # Responsibility
//! - Own the single day -> bit table used by every mask accessor.
//! - Parse user-facing day names into tokens.
//!
//! # Invariants
//! - Discriminants are Sunday-first (`Sunday == 0`), matching chrono's
//!   `num_days_from_sunday`.
//! - `bit()` is always `1 << index()` and fits in seven bits.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static DAY_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(sun|mon|tues|wednes|thurs|fri|satur)(?:day)?$")
        .expect("valid day name regex")
});

/// Day of the week, ordered Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All days in bit order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based index, `Sunday == 0`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The mask bit owned by this day.
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Maps `0..=6` to a day; anything else is `None`.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Lowercase token, e.g. `"wednesday"`.
    pub const fn token(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Capitalized display name, e.g. `"Wednesday"`.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Resolves a day name to a token.
    ///
    /// Accepts, in any case, the stems `sun mon tues wednes thurs fri satur`
    /// with or without a trailing `day`.
    ///
    /// Numeric text is not accepted here; see [`Weekday::from_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        let captures = DAY_NAME_RE.captures(name.trim())?;
        let stem = captures.get(1)?.as_str().to_ascii_lowercase();
        match stem.as_str() {
            "sun" => Some(Weekday::Sunday),
            "mon" => Some(Weekday::Monday),
            "tues" => Some(Weekday::Tuesday),
            "wednes" => Some(Weekday::Wednesday),
            "thurs" => Some(Weekday::Thursday),
            "fri" => Some(Weekday::Friday),
            "satur" => Some(Weekday::Saturday),
            _ => None,
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        Self::ALL[value.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

/// Error returned when text names neither a day nor a `0..=6` index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWeekdayError {
    pub input: String,
}

impl Display for ParseWeekdayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized weekday `{}`", self.input)
    }
}

impl Error for ParseWeekdayError {}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Accepts day names and integer text in `0..=6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| s.trim().parse::<i64>().ok().and_then(Self::from_index))
            .ok_or_else(|| ParseWeekdayError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Weekday;

    #[test]
    fn bits_follow_sunday_first_order() {
        let bits: Vec<u8> = Weekday::ALL.iter().map(|day| day.bit()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64]);
    }

    #[test]
    fn from_name_accepts_abbreviations_and_any_case() {
        assert_eq!(Weekday::from_name("SUNDAY"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_name("tues"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_name("Wednes"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_name(" thurs "), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_name("satur"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_name("fri"), Some(Weekday::Friday));
    }

    #[test]
    fn from_name_rejects_unknown_tokens() {
        assert_eq!(Weekday::from_name("funday"), None);
        assert_eq!(Weekday::from_name("mondays"), None);
        assert_eq!(Weekday::from_name(""), None);
        assert_eq!(Weekday::from_name("3"), None);
        for token in ["wedday", "satday", "thuday", "tueday", "wed", "sat", "thu", "tue"] {
            assert_eq!(Weekday::from_name(token), None, "{token}");
        }
    }

    #[test]
    fn from_str_accepts_index_text() {
        assert_eq!("4".parse::<Weekday>(), Ok(Weekday::Thursday));
        let err = "7".parse::<Weekday>().unwrap_err();
        assert_eq!(err.input, "7");
        assert!(err.to_string().contains("unrecognized weekday"));
    }

    #[test]
    fn chrono_conversion_is_symmetric() {
        for day in Weekday::ALL {
            let chrono_day: chrono::Weekday = day.into();
            assert_eq!(Weekday::from(chrono_day), day);
            assert_eq!(chrono_day.num_days_from_sunday(), u32::from(day.index()));
        }
    }
}
