//! Day detection logic.
//!
//! This module provides utilities for determining the day type (weekday, Saturday,
//! Sunday) of a calendar date and for rendering localized weekday names in tables.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for PTO accounting.
///
/// Only [`DayType::Weekday`] dates can ever be chargeable.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
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
/// Uses the ISO week (Monday start); the boundary is not configurable.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-08-15 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()), DayType::Saturday);
///
/// // 2026-08-16 is a Sunday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 8, 16).unwrap()), DayType::Sunday);
///
/// // 2026-08-14 is a Friday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns `true` for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    get_day_type(date) == DayType::Weekday
}

/// Language used for weekday names in rendered tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English.
    En,
    /// Romanian.
    #[default]
    Ro,
}

/// Returns the weekday name of `date` in the given locale.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::{weekday_name, Locale};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(weekday_name(date, Locale::Ro), "Joi");
/// assert_eq!(weekday_name(date, Locale::En), "Thursday");
/// ```
pub fn weekday_name(date: NaiveDate, locale: Locale) -> &'static str {
    match (locale, date.weekday()) {
        (Locale::Ro, Weekday::Mon) => "Luni",
        (Locale::Ro, Weekday::Tue) => "Marți",
        (Locale::Ro, Weekday::Wed) => "Miercuri",
        (Locale::Ro, Weekday::Thu) => "Joi",
        (Locale::Ro, Weekday::Fri) => "Vineri",
        (Locale::Ro, Weekday::Sat) => "Sâmbătă",
        (Locale::Ro, Weekday::Sun) => "Duminică",
        (Locale::En, Weekday::Mon) => "Monday",
        (Locale::En, Weekday::Tue) => "Tuesday",
        (Locale::En, Weekday::Wed) => "Wednesday",
        (Locale::En, Weekday::Thu) => "Thursday",
        (Locale::En, Weekday::Fri) => "Friday",
        (Locale::En, Weekday::Sat) => "Saturday",
        (Locale::En, Weekday::Sun) => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_week_day_types() {
        // 2026-01-12 is a Monday
        let monday = date(2026, 1, 12);
        let types: Vec<DayType> = monday
            .iter_days()
            .take(7)
            .map(get_day_type)
            .collect();
        assert_eq!(
            types,
            vec![
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekday,
                DayType::Saturday,
                DayType::Sunday,
            ]
        );
    }

    #[test]
    fn test_is_business_day() {
        assert!(is_business_day(date(2026, 8, 14)));
        assert!(!is_business_day(date(2026, 8, 15)));
        assert!(!is_business_day(date(2026, 8, 16)));
    }

    #[test]
    fn test_year_boundary() {
        // 2026-12-31 is a Thursday, 2027-01-02 a Saturday
        assert_eq!(get_day_type(date(2026, 12, 31)), DayType::Weekday);
        assert_eq!(get_day_type(date(2027, 1, 2)), DayType::Saturday);
    }

    #[test]
    fn test_weekday_names_romanian() {
        assert_eq!(weekday_name(date(2026, 11, 30), Locale::Ro), "Luni");
        assert_eq!(weekday_name(date(2026, 12, 1), Locale::Ro), "Marți");
        assert_eq!(weekday_name(date(2026, 8, 15), Locale::Ro), "Sâmbătă");
        assert_eq!(weekday_name(date(2026, 5, 31), Locale::Ro), "Duminică");
    }

    #[test]
    fn test_default_locale_is_romanian() {
        assert_eq!(Locale::default(), Locale::Ro);
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::Weekday.to_string(), "Weekday");
        assert_eq!(DayType::Sunday.to_string(), "Sunday");
    }

    #[test]
    fn test_locale_deserialize() {
        let locale: Locale = serde_yaml::from_str("en").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
