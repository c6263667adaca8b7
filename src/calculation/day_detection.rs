//! Day detection logic.
//!
//! This module determines the day type (weekday, Saturday, Sunday) of a
//! calendar date and counts the weekend days a rental touches.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for surcharge purposes.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert!(day_type.is_weekend());
/// assert_eq!(day_type.to_string(), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-12-07 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2024-12-02 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Counts the Saturdays and Sundays from `start` to `end`, both included.
///
/// Returns 0 when `end` is before `start`. A same-day rental counts its one
/// date.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::count_weekend_days;
/// use chrono::NaiveDate;
///
/// // Thursday 5th to Saturday 7th December 2024
/// let start = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();
/// assert_eq!(count_weekend_days(start, end), 1);
/// ```
pub fn count_weekend_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end - start).num_days() + 1;
    if span <= 0 {
        return 0;
    }

    // Every full week holds exactly two weekend days; only the tail is walked.
    let full_weeks = span / 7;
    let tail = start
        .iter_days()
        .take((span % 7) as usize)
        .filter(|date| get_day_type(*date).is_weekend())
        .count();
    u32::try_from(full_weeks * 2 + tail as i64).unwrap_or(u32::MAX)
}
