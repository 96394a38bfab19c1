//! Chargeable PTO day counting.
//!
//! This module converts a vacation window into the number of PTO days it costs:
//! the business days in the window that are neither statutory holidays nor
//! personal days off.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_detection::is_business_day;

/// The detailed result of counting chargeable days in a window.
///
/// Every date in the window is accounted for exactly once, in the first of
/// these buckets that applies: weekend, holiday, personal day, chargeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeableDaysResult {
    /// First day of the normalized window.
    pub start: NaiveDate,
    /// Last day of the normalized window.
    pub end: NaiveDate,
    /// Number of PTO days required.
    pub chargeable_days: u32,
    /// The dates that require PTO, in order.
    pub chargeable_dates: Vec<NaiveDate>,
    /// Saturdays and Sundays in the window.
    pub weekend_days: u32,
    /// Business days covered by a statutory holiday.
    pub holiday_days: u32,
    /// Business days covered by a personal day off (and not a holiday).
    pub personal_days: u32,
}

/// Counts the PTO days needed to take `[start, end]` off.
///
/// The bounds may be given in either order. A business day is excluded if it
/// appears in either `holiday_dates` or `personal_dates`; membership, not
/// subtraction, so overlapping sets never double-count. The function is pure.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use vacation_planner::calculation::compute_chargeable_days;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let holidays: BTreeSet<_> = [d(1, 1), d(1, 2)].into_iter().collect();
/// let personal = BTreeSet::new();
///
/// // Thu Jan 1 to Wed Jan 7: weekdays 1, 2, 5, 6, 7; 1 and 2 are holidays
/// assert_eq!(compute_chargeable_days(d(1, 1), d(1, 7), &holidays, &personal), 3);
/// ```
pub fn compute_chargeable_days(
    start: NaiveDate,
    end: NaiveDate,
    holiday_dates: &BTreeSet<NaiveDate>,
    personal_dates: &BTreeSet<NaiveDate>,
) -> u32 {
    let (start, end) = normalize(start, end);
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d))
        .filter(|d| !holiday_dates.contains(d) && !personal_dates.contains(d))
        .count() as u32
}

/// Counts chargeable days and reports how every date in the window was classified.
///
/// `chargeable_days` always equals [`compute_chargeable_days`] for the same input.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use vacation_planner::calculation::chargeable_breakdown;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let holidays: BTreeSet<_> = [d(8, 15)].into_iter().collect();
///
/// // Fri Aug 14 to Sun Aug 16; the holiday falls on Saturday
/// let result = chargeable_breakdown(d(8, 16), d(8, 14), &holidays, &BTreeSet::new());
/// assert_eq!(result.start, d(8, 14));
/// assert_eq!(result.chargeable_dates, vec![d(8, 14)]);
/// assert_eq!(result.weekend_days, 2);
/// assert_eq!(result.holiday_days, 0);
/// ```
pub fn chargeable_breakdown(
    start: NaiveDate,
    end: NaiveDate,
    holiday_dates: &BTreeSet<NaiveDate>,
    personal_dates: &BTreeSet<NaiveDate>,
) -> ChargeableDaysResult {
    let (start, end) = normalize(start, end);
    let mut result = ChargeableDaysResult {
        start,
        end,
        chargeable_days: 0,
        chargeable_dates: Vec::new(),
        weekend_days: 0,
        holiday_days: 0,
        personal_days: 0,
    };

    for date in start.iter_days().take_while(|d| *d <= end) {
        if !is_business_day(date) {
            result.weekend_days += 1;
        } else if holiday_dates.contains(&date) {
            result.holiday_days += 1;
        } else if personal_dates.contains(&date) {
            result.personal_days += 1;
        } else {
            result.chargeable_days += 1;
            result.chargeable_dates.push(date);
        }
    }

    result
}

fn normalize(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    if start > end { (end, start) } else { (start, end) }
}
