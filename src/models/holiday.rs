//! Statutory holiday models.
//!
//! This module contains the [`Holiday`] entry and the [`HolidayLookup`] result
//! returned by the holiday provider, which records whether the table used is the
//! one for the requested year or a fallback.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlannerWarning;

/// A statutory public holiday.
///
/// Several observances may share a date (Pentecost Monday and Children's Day
/// both fall on 2026-06-01); exclusion works on the date set, so such entries
/// collapse to one excluded day.
///
/// # Example
///
/// ```
/// use vacation_planner::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
///     name: "Ziua Națională a României".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
}

/// Whether a holiday table matches the year that was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableStatus {
    /// The table is the curated one for the requested year.
    Verified,
    /// The requested year has no data; the table of `used` was substituted.
    Fallback {
        /// The year the caller asked for.
        requested: i32,
        /// The year whose table was returned instead.
        used: i32,
    },
}

/// The result of looking up the holiday table for a year.
///
/// Holidays are sorted by date. A fallback lookup always carries an
/// `UNSUPPORTED_YEAR` warning so callers cannot mistake the substituted
/// table for real data.
///
/// # Example
///
/// ```
/// use vacation_planner::models::{Holiday, HolidayLookup, TableStatus};
/// use chrono::NaiveDate;
///
/// let lookup = HolidayLookup::verified(
///     2026,
///     vec![
///         Holiday { date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), name: "A doua zi de Rusalii".into() },
///         Holiday { date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), name: "Ziua Copilului".into() },
///     ],
/// );
///
/// assert_eq!(lookup.status, TableStatus::Verified);
/// assert_eq!(lookup.holidays.len(), 2);
/// assert_eq!(lookup.dates().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayLookup {
    /// The year the caller asked for.
    pub year: i32,
    /// Holidays sorted by date.
    pub holidays: Vec<Holiday>,
    /// Whether the table is verified for `year` or a fallback.
    pub status: TableStatus,
    /// Warnings to surface to the user.
    pub warnings: Vec<PlannerWarning>,
}

impl HolidayLookup {
    /// Creates a lookup for a year that has its own table.
    pub fn verified(year: i32, holidays: Vec<Holiday>) -> Self {
        Self {
            year,
            holidays: sorted(holidays),
            status: TableStatus::Verified,
            warnings: Vec::new(),
        }
    }

    /// Creates a lookup that substitutes the table of `used` for `requested`.
    pub fn fallback(requested: i32, used: i32, holidays: Vec<Holiday>) -> Self {
        Self {
            year: requested,
            holidays: sorted(holidays),
            status: TableStatus::Fallback { requested, used },
            warnings: vec![PlannerWarning::unsupported_year(requested, used)],
        }
    }

    /// Returns `true` if the table is a fallback for an unsupported year.
    pub fn is_fallback(&self) -> bool {
        matches!(self.status, TableStatus::Fallback { .. })
    }

    /// Returns the set of holiday dates used for exclusion.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.holidays.iter().map(|h| h.date).collect()
    }

    /// The year whose holidays the table actually lists.
    pub fn table_year(&self) -> i32 {
        match self.status {
            TableStatus::Verified => self.year,
            TableStatus::Fallback { used, .. } => used,
        }
    }
}

fn sorted(mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    // Stable, so same-date observances keep their authored order.
    holidays.sort_by_key(|h| h.date);
    holidays
}
