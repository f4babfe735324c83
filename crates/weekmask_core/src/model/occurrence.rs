//! Date scanning against a [`WeekMask`].
//!
//! # Invariants
//! - Scanning never mutates the mask.
//! - An empty mask matches no date, so every scan short-circuits on it.
//! - `next_occurrence` inspects at most seven consecutive days.

use crate::model::week_mask::WeekMask;
use crate::model::weekday::Weekday;
use chrono::{Datelike, Local, NaiveDate};
use std::ops::RangeInclusive;

const DAYS_PER_WEEK: usize = 7;

impl WeekMask {
    /// Whether the weekday of `date` is set.
    pub fn matches<D: Datelike>(&self, date: &D) -> bool {
        self.contains(Weekday::from(date.weekday()))
    }

    /// First matching date on or after `from`, defaulting to today's local date.
    ///
    /// Returns `None` for an empty mask, and when the calendar ends
    /// (`NaiveDate::MAX`) before a matching day is reached.
    pub fn next_occurrence(&self, from: Option<NaiveDate>) -> Option<NaiveDate> {
        if self.is_empty() {
            return None;
        }
        let from = from.unwrap_or_else(|| Local::now().date_naive());
        from.iter_days()
            .take(DAYS_PER_WEEK)
            .find(|date| self.matches(date))
    }

    /// Like [`WeekMask::next_occurrence`], starting from the calendar date of
    /// any date/time value. Time-of-day is discarded.
    pub fn next_occurrence_from<D: Datelike>(&self, from: &D) -> Option<NaiveDate> {
        let date = NaiveDate::from_num_days_from_ce_opt(from.num_days_from_ce())?;
        self.next_occurrence(Some(date))
    }

    /// Matching dates within `range`, both ends inclusive.
    ///
    /// Iterates forward from the range start; a range whose start is after
    /// its end iterates nothing and yields an empty list.
    pub fn occurrences_in(&self, range: RangeInclusive<NaiveDate>) -> Vec<NaiveDate> {
        if self.is_empty() {
            return Vec::new();
        }
        let (start, end) = range.into_inner();
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| self.matches(date))
            .collect()
    }

    /// Keeps the matching values of `dates`, preserving their order.
    pub fn occurrences_among<I, D>(&self, dates: I) -> Vec<D>
    where
        I: IntoIterator<Item = D>,
        D: Datelike,
    {
        if self.is_empty() {
            return Vec::new();
        }
        dates
            .into_iter()
            .filter(|date| self.matches(date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::week_mask::WeekMask;
    use crate::model::weekday::Weekday;
    use chrono::{Datelike, Local, NaiveDate};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn next_occurrence_defaults_to_today() {
        let mask = WeekMask::FULL;
        let today = Local::now().date_naive();
        let next = mask.next_occurrence(None).unwrap();
        // A midnight rollover between the two reads can shift by one day.
        assert!(next == today || next == today.succ_opt().unwrap());
    }

    #[test]
    fn next_occurrence_stays_within_one_week() {
        let from = ymd(2013, 4, 1);
        for day in Weekday::ALL {
            let next = WeekMask::from(day).next_occurrence(Some(from)).unwrap();
            assert!(next >= from);
            assert!((next - from).num_days() < 7);
            assert_eq!(Weekday::from(next.weekday()), day);
        }
    }

    #[test]
    fn next_occurrence_stops_at_calendar_end() {
        let last = NaiveDate::MAX;
        let other_day = Weekday::from(last.weekday().succ());
        assert_eq!(WeekMask::from(other_day).next_occurrence(Some(last)), None);
        assert_eq!(WeekMask::FULL.next_occurrence(Some(last)), Some(last));
    }

    #[test]
    fn next_occurrence_from_drops_time_of_day() {
        let from = ymd(2013, 4, 1).and_hms_opt(18, 30, 0).unwrap();
        let mask = WeekMask::from(Weekday::Tuesday);
        assert_eq!(mask.next_occurrence_from(&from), Some(ymd(2013, 4, 2)));
    }

    #[test]
    fn occurrences_among_preserves_input_order() {
        let mut mask = WeekMask::EMPTY;
        mask.set_many([Weekday::Monday, Weekday::Wednesday]);
        let dates = vec![ymd(2013, 4, 3), ymd(2013, 4, 2), ymd(2013, 4, 1)];
        assert_eq!(
            mask.occurrences_among(dates),
            vec![ymd(2013, 4, 3), ymd(2013, 4, 1)]
        );
    }
}
