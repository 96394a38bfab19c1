//! User-declared days off and custom vacation intervals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day off that does not consume PTO (e.g. a company day or a swapped day).
///
/// Duplicate dates are allowed; they are excluded from the PTO count once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDay {
    /// The date of the day off.
    pub date: NaiveDate,
    /// A free-text label.
    pub label: String,
}

/// A vacation window authored by the user.
///
/// `pto_cost` is derived by the accounting engine from the session's holiday
/// and personal-day sets; the session refreshes it whenever the personal-day
/// set changes.
///
/// # Example
///
/// ```
/// use vacation_planner::models::CustomVacationInterval;
/// use chrono::NaiveDate;
///
/// let interval = CustomVacationInterval {
///     start: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 7, 17).unwrap(),
///     description: "Summer trip".to_string(),
///     pto_cost: 10,
/// };
/// assert!(interval.start <= interval.end);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomVacationInterval {
    /// First day of the window (inclusive). Always `<= end`.
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
    /// A free-text description.
    pub description: String,
    /// Chargeable PTO days in the window.
    pub pto_cost: u32,
}
