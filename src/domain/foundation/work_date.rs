//! Calendar-date value object for schedules, attendance, and votes.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A calendar date with no time-of-day component.
///
/// Everything the engine schedules or counts happens on whole days:
/// attendance is recorded per date, votes name dates, streaks compare
/// dates. Time zones are the caller's concern; by the time a date reaches
/// the engine it is already the team-local calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkDate(NaiveDate);

impl WorkDate {
    /// Creates a date from year/month/day, rejecting invalid combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a valid calendar date", year, month, day),
                )
            })
    }

    /// Creates a WorkDate from a chrono NaiveDate.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the following calendar date.
    ///
    /// Saturates at the end of chrono's supported range.
    pub fn next_day(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Returns the date offset by the given number of days.
    ///
    /// Negative offsets go backwards. Saturates at the calendar bounds.
    pub fn plus_days(&self, days: i64) -> Self {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Returns the signed number of days from self to other.
    pub fn days_until(&self, other: &WorkDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Returns the Monday of the week this date falls in.
    pub fn week_monday(&self) -> Self {
        let back = i64::from(self.0.weekday().num_days_from_monday());
        self.plus_days(-back)
    }
}

impl fmt::Display for WorkDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for WorkDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::parse_from_str(s, "%Y-%m-%d")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_dates() {
        let date = WorkDate::new(2025, 3, 17).unwrap();
        assert_eq!(date.to_string(), "2025-03-17");
    }

    #[test]
    fn new_rejects_invalid_dates() {
        assert!(WorkDate::new(2025, 2, 30).is_err());
        assert!(WorkDate::new(2025, 13, 1).is_err());
    }

    #[test]
    fn parses_iso_format() {
        let date: WorkDate = "2025-03-17".parse().unwrap();
        assert_eq!(date, WorkDate::new(2025, 3, 17).unwrap());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("17/03/2025".parse::<WorkDate>().is_err());
        assert!("not-a-date".parse::<WorkDate>().is_err());
    }

    #[test]
    fn weekday_is_correct() {
        // 2025-03-17 is a Monday
        let date = WorkDate::new(2025, 3, 17).unwrap();
        assert_eq!(date.weekday(), Weekday::Mon);
        assert_eq!(date.plus_days(4).weekday(), Weekday::Fri);
    }

    #[test]
    fn next_day_crosses_month_boundary() {
        let date = WorkDate::new(2025, 3, 31).unwrap();
        assert_eq!(date.next_day(), WorkDate::new(2025, 4, 1).unwrap());
    }

    #[test]
    fn plus_days_goes_backwards_with_negative_offset() {
        let date = WorkDate::new(2025, 3, 17).unwrap();
        assert_eq!(date.plus_days(-3), WorkDate::new(2025, 3, 14).unwrap());
    }

    #[test]
    fn days_until_is_signed() {
        let mon = WorkDate::new(2025, 3, 17).unwrap();
        let wed = WorkDate::new(2025, 3, 19).unwrap();
        assert_eq!(mon.days_until(&wed), 2);
        assert_eq!(wed.days_until(&mon), -2);
    }

    #[test]
    fn week_monday_snaps_any_weekday() {
        let monday = WorkDate::new(2025, 3, 17).unwrap();
        for offset in 0..7 {
            assert_eq!(monday.plus_days(offset).week_monday(), monday);
        }
    }

    #[test]
    fn serializes_as_iso_string() {
        let date = WorkDate::new(2025, 3, 17).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-03-17\"");
    }

    #[test]
    fn deserializes_from_iso_string() {
        let date: WorkDate = serde_json::from_str("\"2025-03-17\"").unwrap();
        assert_eq!(date, WorkDate::new(2025, 3, 17).unwrap());
    }

    #[test]
    fn ordering_follows_the_calendar() {
        let earlier = WorkDate::new(2025, 3, 17).unwrap();
        let later = WorkDate::new(2025, 3, 18).unwrap();
        assert!(earlier < later);
    }
}
