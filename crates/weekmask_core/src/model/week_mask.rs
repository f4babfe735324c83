//! Seven-bit "days of the week" mask.
//!
//! # Responsibility
//! - Store a weekday selection as one small integer suitable for embedding
//!   in a larger persisted record.
//! - Provide total query and mutation helpers over that integer.
//!
//! # Invariants
//! - The stored value is always within `0..=127`; no operation can leave it
//!   outside that range.
//! - Bit `n` belongs to the day with Sunday-first index `n`.
//! - No operation panics or returns an error. Unknown day identifiers are
//!   `None` for getters and ignored by setters.

use crate::model::day_ref::DayRef;
use crate::model::weekday::Weekday;
use log::{debug, trace};
use num_traits::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Largest storable value: all seven bits set.
pub const MAX_VALUE: u8 = (1 << 7) - 1;

/// A set of weekdays packed into the low seven bits of a byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekMask(u8);

impl WeekMask {
    /// Empty mask.
    pub const EMPTY: WeekMask = WeekMask(0);
    /// Every day set.
    pub const FULL: WeekMask = WeekMask(MAX_VALUE);

    /// Builds a mask from an integer, clamping into `0..=127`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX_VALUE)) as u8)
    }

    /// Builds a mask from any numeric seed.
    ///
    /// `None`, NaN and values that do not fit an `i128` all produce the empty
    /// mask. Floats are truncated toward zero before clamping.
    pub fn from_seed<T: ToPrimitive>(seed: Option<T>) -> Self {
        match seed.and_then(|value| value.to_i128()) {
            Some(value) => Self(value.clamp(0, i128::from(MAX_VALUE)) as u8),
            None => {
                debug!("event=seed_fallback module=week_mask status=ignored value=0");
                Self::EMPTY
            }
        }
    }

    pub const fn to_integer(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == MAX_VALUE
    }

    pub const fn has_any(self) -> bool {
        !self.is_empty()
    }

    /// True when exactly one day is set.
    pub const fn has_exactly_one(self) -> bool {
        self.has_any() && self.0 & (self.0 - 1) == 0
    }

    /// True when two or more days are set.
    pub const fn has_many(self) -> bool {
        self.has_any() && !self.has_exactly_one()
    }

    /// Whether `day` is set.
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Looks up a day by any identifier.
    ///
    /// Returns `None` when the identifier names no day, so callers can tell
    /// "not set" apart from "not recognized".
    pub fn get(&self, day: impl Into<DayRef>) -> Option<bool> {
        day.into().resolve().map(|day| self.contains(day))
    }

    /// Sets or clears a day by any identifier. Unknown identifiers are ignored.
    pub fn set(&mut self, day: impl Into<DayRef>, flag: bool) -> &mut Self {
        let day = day.into();
        match day.resolve() {
            Some(day) if flag => self.0 |= day.bit(),
            Some(day) => self.0 &= !day.bit() & MAX_VALUE,
            None => trace!("event=day_ignored module=week_mask identifier={day:?}"),
        }
        self
    }

    /// Sets every recognized identifier, skipping the rest.
    pub fn set_many<I>(&mut self, days: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DayRef>,
    {
        for day in days {
            self.set(day, true);
        }
        self
    }

    /// Replaces the selection with exactly the recognized identifiers.
    pub fn set_only<I>(&mut self, days: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DayRef>,
    {
        self.clear().set_many(days)
    }

    /// Clears every recognized identifier, skipping the rest.
    pub fn unset_many<I>(&mut self, days: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DayRef>,
    {
        for day in days {
            self.set(day, false);
        }
        self
    }

    /// Selects every day except the recognized identifiers.
    pub fn unset_only<I>(&mut self, days: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DayRef>,
    {
        self.fill().unset_many(days)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.0 = 0;
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        self.0 = MAX_VALUE;
        self
    }

    /// Set days in Sunday-first order.
    pub fn to_day_list(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.contains(*day))
            .collect()
    }

    /// Membership of all seven days.
    pub fn to_day_map(&self) -> BTreeMap<Weekday, bool> {
        Weekday::ALL
            .into_iter()
            .map(|day| (day, self.contains(day)))
            .collect()
    }

    /// Human-readable summary, e.g. `"42: Monday, Wednesday, Friday"`.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "0: no days".to_string();
        }
        if self.is_full() {
            return format!("{MAX_VALUE}: every day");
        }
        let names: Vec<&str> = self.to_day_list().into_iter().map(Weekday::name).collect();
        format!("{}: {}", self.0, names.join(", "))
    }
}

macro_rules! named_day_accessors {
    ($($day:ident => $variant:ident),* $(,)?) => {
        paste::paste! {
            impl WeekMask {
                $(
                    #[doc = "Whether " $variant " is set."]
                    pub const fn $day(&self) -> bool {
                        self.contains(Weekday::$variant)
                    }

                    #[doc = "Sets or clears " $variant "."]
                    pub fn [<set_ $day>](&mut self, flag: bool) -> &mut Self {
                        self.set(Weekday::$variant, flag)
                    }
                )*
            }
        }
    };
}

named_day_accessors! {
    sunday => Sunday,
    monday => Monday,
    tuesday => Tuesday,
    wednesday => Wednesday,
    thursday => Thursday,
    friday => Friday,
    saturday => Saturday,
}

macro_rules! week_mask_eq_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for WeekMask {
                fn eq(&self, other: &$ty) -> bool {
                    <$ty>::try_from(self.0).map_or(false, |value| value == *other)
                }
            }

            impl PartialEq<WeekMask> for $ty {
                fn eq(&self, other: &WeekMask) -> bool {
                    other == self
                }
            }
        )*
    };
}

week_mask_eq_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Weekday> for WeekMask {
    fn from(value: Weekday) -> Self {
        Self(value.bit())
    }
}

impl FromIterator<Weekday> for WeekMask {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut mask = Self::EMPTY;
        mask.set_many(iter);
        mask
    }
}

impl Display for WeekMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl FromStr for WeekMask {
    type Err = Infallible;

    /// Same as [`crate::load`]: unparseable text becomes the empty mask.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::persist::load(s))
    }
}

impl Serialize for WeekMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for WeekMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WeekMaskVisitor)
    }
}

struct WeekMaskVisitor;

impl<'de> Visitor<'de> for WeekMaskVisitor {
    type Value = WeekMask;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer or integer string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<WeekMask, E> {
        Ok(WeekMask::new(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<WeekMask, E> {
        Ok(WeekMask::from_seed(Some(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<WeekMask, E> {
        Ok(WeekMask::from_seed(Some(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<WeekMask, E> {
        Ok(crate::persist::load(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<WeekMask, E> {
        Ok(WeekMask::EMPTY)
    }

    fn visit_none<E: de::Error>(self) -> Result<WeekMask, E> {
        Ok(WeekMask::EMPTY)
    }
}
