//! Holiday sources keyed by year.

use std::collections::BTreeMap;

use crate::models::Holiday;

/// A source of curated holiday tables.
///
/// `None` means the source has no data for the year. `Some(vec![])` means the
/// year is known to have no holidays. Callers must not conflate the two.
pub trait HolidaySource {
    /// Returns the holiday table for `year`, if the source has one.
    fn holidays_for(&self, year: i32) -> Option<Vec<Holiday>>;
}

/// An in-memory holiday source.
///
/// # Example
///
/// ```
/// use vacation_planner::holidays::{HolidaySource, StaticHolidaySource};
/// use vacation_planner::models::Holiday;
/// use chrono::NaiveDate;
///
/// let source = StaticHolidaySource::new()
///     .with_year(2026, vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
///         name: "Ziua Muncii".to_string(),
///     }])
///     .with_year(2099, vec![]);
///
/// assert_eq!(source.holidays_for(2026).unwrap().len(), 1);
/// assert_eq!(source.holidays_for(2099), Some(vec![]));
/// assert_eq!(source.holidays_for(2027), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    tables: BTreeMap<i32, Vec<Holiday>>,
}

impl StaticHolidaySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the table for a year.
    pub fn with_year(mut self, year: i32, holidays: Vec<Holiday>) -> Self {
        self.tables.insert(year, holidays);
        self
    }
}

impl HolidaySource for StaticHolidaySource {
    fn holidays_for(&self, year: i32) -> Option<Vec<Holiday>> {
        self.tables.get(&year).cloned()
    }
}

impl<S: HolidaySource + ?Sized> HolidaySource for &S {
    fn holidays_for(&self, year: i32) -> Option<Vec<Holiday>> {
        (**self).holidays_for(year)
    }
}
