//! Holiday table lookup with an explicit fallback signal.

use tracing::warn;

use crate::error::{PlannerError, PlannerResult};
use crate::models::HolidayLookup;

use super::HolidaySource;

/// Looks up holiday tables by year, substituting a fallback year's table when
/// the requested year has no data.
///
/// A substituted table is flagged through [`HolidayLookup::status`] and an
/// `UNSUPPORTED_YEAR` warning; it is never returned silently.
///
/// # Example
///
/// ```
/// use vacation_planner::holidays::{HolidayProvider, StaticHolidaySource};
/// use vacation_planner::models::{Holiday, TableStatus};
/// use chrono::NaiveDate;
///
/// let source = StaticHolidaySource::new().with_year(2026, vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Crăciun".to_string(),
/// }]);
/// let provider = HolidayProvider::new(source, 2026);
///
/// let lookup = provider.lookup(2026).unwrap();
/// assert_eq!(lookup.status, TableStatus::Verified);
///
/// let lookup = provider.lookup(2027).unwrap();
/// assert_eq!(lookup.status, TableStatus::Fallback { requested: 2027, used: 2026 });
/// assert_eq!(lookup.warnings[0].code, "UNSUPPORTED_YEAR");
/// ```
#[derive(Debug, Clone)]
pub struct HolidayProvider<S> {
    source: S,
    fallback_year: i32,
}

impl<S: HolidaySource> HolidayProvider<S> {
    /// Creates a provider over `source` that falls back to `fallback_year`.
    pub fn new(source: S, fallback_year: i32) -> Self {
        Self {
            source,
            fallback_year,
        }
    }

    /// Returns the holiday table for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::HolidayTableMissing`] if neither `year` nor the
    /// fallback year has a table.
    pub fn lookup(&self, year: i32) -> PlannerResult<HolidayLookup> {
        if let Some(holidays) = self.source.holidays_for(year) {
            return Ok(HolidayLookup::verified(year, holidays));
        }

        let holidays = self
            .source
            .holidays_for(self.fallback_year)
            .ok_or(PlannerError::HolidayTableMissing { year })?;

        warn!(
            requested = year,
            used = self.fallback_year,
            "No holiday table for requested year, using fallback"
        );
        Ok(HolidayLookup::fallback(year, self.fallback_year, holidays))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::StaticHolidaySource;
    use crate::models::{Holiday, TableStatus};
    use chrono::NaiveDate;

    fn holiday(y: i32, m: u32, d: u32, name: &str) -> Holiday {
        Holiday {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            name: name.to_string(),
        }
    }

    fn source() -> StaticHolidaySource {
        StaticHolidaySource::new().with_year(
            2026,
            vec![holiday(2026, 5, 1, "Ziua Muncii"), holiday(2026, 1, 1, "Anul Nou")],
        )
    }

    #[test]
    fn test_lookup_supported_year_is_verified() {
        let provider = HolidayProvider::new(source(), 2026);
        let lookup = provider.lookup(2026).unwrap();
        assert_eq!(lookup.status, TableStatus::Verified);
        assert_eq!(lookup.year, 2026);
        assert!(lookup.warnings.is_empty());
        assert_eq!(lookup.holidays[0].name, "Anul Nou");
    }

    #[test]
    fn test_lookup_unsupported_year_falls_back_with_warning() {
        let provider = HolidayProvider::new(source(), 2026);
        let lookup = provider.lookup(2030).unwrap();
        assert!(lookup.is_fallback());
        assert_eq!(lookup.year, 2030);
        assert_eq!(lookup.holidays.len(), 2);
        assert_eq!(lookup.warnings.len(), 1);
    }

    #[test]
    fn test_empty_year_is_not_fallback() {
        let source = source().with_year(2099, vec![]);
        let provider = HolidayProvider::new(source, 2026);
        let lookup = provider.lookup(2099).unwrap();
        assert_eq!(lookup.status, TableStatus::Verified);
        assert!(lookup.holidays.is_empty());
    }

    #[test]
    fn test_missing_fallback_is_error() {
        let provider = HolidayProvider::new(StaticHolidaySource::new(), 2026);
        match provider.lookup(2027) {
            Err(PlannerError::HolidayTableMissing { year }) => assert_eq!(year, 2027),
            other => panic!("Expected HolidayTableMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_over_borrowed_source() {
        let source = source();
        let provider = HolidayProvider::new(&source, 2026);
        assert!(provider.lookup(2026).is_ok());
    }
}
