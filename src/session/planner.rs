//! The planner session: all user state for one planning year.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calculation::{
    ChargeableDaysResult, Locale, chargeable_breakdown, compute_chargeable_days, summarize,
};
use crate::config::{ConfigLoader, PtoBounds};
use crate::error::{PlannerError, PlannerResult};
use crate::holidays::HolidayProvider;
use crate::models::{
    CustomVacationInterval, HolidayLookup, PersonalDay, PlannerWarning, ProposalCatalog,
    PtoSummary,
};

/// Longest window, in calendar days, that the session will count.
pub const MAX_WINDOW_DAYS: i64 = 732;

const PERSONAL_DAYS: &str = "personal_days";
const CUSTOM_INTERVALS: &str = "custom_intervals";

/// All state of one planning session.
///
/// Every mutating operation either succeeds completely or returns an error and
/// leaves the session unchanged. Custom interval costs are recomputed whenever
/// the personal-day set changes, so they always reflect the current sets.
///
/// # Example
///
/// ```no_run
/// use vacation_planner::config::ConfigLoader;
/// use vacation_planner::session::PlannerSession;
/// use chrono::NaiveDate;
///
/// let config = ConfigLoader::load("./config/ro")?;
/// let mut session = PlannerSession::new(&config, 2026)?;
///
/// session.add_custom_interval(
///     NaiveDate::from_ymd_opt(2026, 7, 6),
///     NaiveDate::from_ymd_opt(2026, 7, 10),
///     "Summer trip",
/// )?;
///
/// let summary = session.summary();
/// println!("{} of {} PTO days left", summary.remaining, summary.total);
/// # Ok::<(), vacation_planner::error::PlannerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlannerSession {
    year: i32,
    locale: Locale,
    bounds: PtoBounds,
    total_pto: u32,
    holidays: HolidayLookup,
    proposals: ProposalCatalog,
    personal_days: Vec<PersonalDay>,
    custom_intervals: Vec<CustomVacationInterval>,
}

impl PlannerSession {
    /// Starts a session for `year` from loaded configuration.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidInput`] if `year` is outside the configured range
    /// - [`PlannerError::HolidayTableMissing`] if no holiday table can be found
    pub fn new(config: &ConfigLoader, year: i32) -> PlannerResult<Self> {
        let settings = config.settings();

        if !settings.years.contains(year) {
            return Err(PlannerError::InvalidInput {
                field: "year".to_string(),
                message: format!(
                    "must be between {} and {}",
                    settings.years.min, settings.years.max
                ),
            });
        }

        let provider = HolidayProvider::new(config, settings.fallback_year);
        let holidays = provider.lookup(year)?;

        info!(
            year,
            country = %settings.country,
            holidays = holidays.holidays.len(),
            fallback = holidays.is_fallback(),
            "Planner session started"
        );

        Ok(Self::from_parts(
            holidays,
            config.proposal_catalog(year),
            settings.pto,
            settings.locale,
        ))
    }

    /// Assembles a session from already-resolved parts.
    pub fn from_parts(
        holidays: HolidayLookup,
        proposals: ProposalCatalog,
        bounds: PtoBounds,
        locale: Locale,
    ) -> Self {
        Self {
            year: holidays.year,
            locale,
            bounds,
            total_pto: bounds.default_total,
            holidays,
            proposals,
            personal_days: Vec::new(),
            custom_intervals: Vec::new(),
        }
    }

    /// The year being planned.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The locale for rendered weekday names.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The declared PTO total.
    pub fn total_pto(&self) -> u32 {
        self.total_pto
    }

    /// The holiday table in use, with its verification status.
    pub fn holidays(&self) -> &HolidayLookup {
        &self.holidays
    }

    /// Warnings the user should see (e.g. an unverified holiday table).
    pub fn warnings(&self) -> &[PlannerWarning] {
        &self.holidays.warnings
    }

    /// The proposal catalog with current inclusion flags.
    pub fn proposals(&self) -> &ProposalCatalog {
        &self.proposals
    }

    /// Personal days in insertion order.
    pub fn personal_days(&self) -> &[PersonalDay] {
        &self.personal_days
    }

    /// Custom intervals in insertion order.
    pub fn custom_intervals(&self) -> &[CustomVacationInterval] {
        &self.custom_intervals
    }

    /// The holiday exclusion set.
    pub fn holiday_dates(&self) -> BTreeSet<NaiveDate> {
        self.holidays.dates()
    }

    /// The personal-day exclusion set.
    pub fn personal_dates(&self) -> BTreeSet<NaiveDate> {
        self.personal_days.iter().map(|p| p.date).collect()
    }

    /// Sets the declared PTO total.
    ///
    /// # Errors
    ///
    /// [`PlannerError::InvalidInput`] if `total` is outside the configured bounds.
    pub fn set_total_pto(&mut self, total: u32) -> PlannerResult<()> {
        if !self.bounds.contains(total) {
            return Err(PlannerError::InvalidInput {
                field: "total_pto".to_string(),
                message: format!(
                    "must be between {} and {}",
                    self.bounds.min_total, self.bounds.max_total
                ),
            });
        }
        self.total_pto = total;
        debug!(total, "Total PTO updated");
        Ok(())
    }

    /// Adds a personal day off and returns its index.
    ///
    /// # Errors
    ///
    /// [`PlannerError::InvalidInput`] if no date was chosen.
    pub fn add_personal_day(
        &mut self,
        date: Option<NaiveDate>,
        label: impl Into<String>,
    ) -> PlannerResult<usize> {
        let date = date.ok_or_else(|| missing_date("date"))?;
        self.personal_days.push(PersonalDay {
            date,
            label: label.into(),
        });
        self.refresh_interval_costs();
        debug!(%date, "Personal day added");
        Ok(self.personal_days.len() - 1)
    }

    /// Replaces the label of a personal day.
    pub fn update_personal_day_label(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> PlannerResult<()> {
        let len = self.personal_days.len();
        let day = self
            .personal_days
            .get_mut(index)
            .ok_or_else(|| out_of_range(PERSONAL_DAYS, index, len))?;
        day.label = label.into();
        Ok(())
    }

    /// Removes a personal day and returns it.
    pub fn remove_personal_day(&mut self, index: usize) -> PlannerResult<PersonalDay> {
        if index >= self.personal_days.len() {
            return Err(out_of_range(PERSONAL_DAYS, index, self.personal_days.len()));
        }
        let removed = self.personal_days.remove(index);
        self.refresh_interval_costs();
        debug!(date = %removed.date, "Personal day removed");
        Ok(removed)
    }

    /// Includes or excludes a catalog proposal from planned PTO.
    pub fn set_proposal_included(&mut self, id: &str, included: bool) -> PlannerResult<()> {
        if !self.proposals.set_included(id, included) {
            return Err(PlannerError::ProposalNotFound { id: id.to_string() });
        }
        debug!(id, included, "Proposal inclusion updated");
        Ok(())
    }

    /// Adds a custom vacation interval and returns its index.
    ///
    /// The bounds may be given in either order; they are stored normalized.
    ///
    /// # Errors
    ///
    /// [`PlannerError::InvalidInput`] if either date is missing.
    pub fn add_custom_interval(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        description: impl Into<String>,
    ) -> PlannerResult<usize> {
        let start = start.ok_or_else(|| missing_date("start"))?;
        let end = end.ok_or_else(|| missing_date("end"))?;
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        check_window(start, end)?;

        let pto_cost = self.cost_of(start, end);
        self.custom_intervals.push(CustomVacationInterval {
            start,
            end,
            description: description.into(),
            pto_cost,
        });
        debug!(%start, %end, pto_cost, "Custom interval added");
        Ok(self.custom_intervals.len() - 1)
    }

    /// Replaces the description of a custom interval.
    pub fn update_custom_interval_description(
        &mut self,
        index: usize,
        description: impl Into<String>,
    ) -> PlannerResult<()> {
        let len = self.custom_intervals.len();
        let interval = self
            .custom_intervals
            .get_mut(index)
            .ok_or_else(|| out_of_range(CUSTOM_INTERVALS, index, len))?;
        interval.description = description.into();
        Ok(())
    }

    /// Removes a custom interval and returns it.
    pub fn remove_custom_interval(
        &mut self,
        index: usize,
    ) -> PlannerResult<CustomVacationInterval> {
        if index >= self.custom_intervals.len() {
            return Err(out_of_range(
                CUSTOM_INTERVALS,
                index,
                self.custom_intervals.len(),
            ));
        }
        Ok(self.custom_intervals.remove(index))
    }

    /// Counts chargeable days for a window against the session's sets.
    ///
    /// # Errors
    ///
    /// [`PlannerError::InvalidInput`] if the window is longer than [`MAX_WINDOW_DAYS`].
    pub fn chargeable_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PlannerResult<ChargeableDaysResult> {
        check_window(start, end)?;
        Ok(chargeable_breakdown(
            start,
            end,
            &self.holiday_dates(),
            &self.personal_dates(),
        ))
    }

    /// Computes planned and remaining PTO from the current state.
    pub fn summary(&self) -> PtoSummary {
        summarize(self.total_pto, &self.proposals, &self.custom_intervals)
    }

    fn cost_of(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        compute_chargeable_days(start, end, &self.holiday_dates(), &self.personal_dates())
    }

    fn refresh_interval_costs(&mut self) {
        let holidays = self.holiday_dates();
        let personal = self.personal_dates();
        for interval in &mut self.custom_intervals {
            interval.pto_cost =
                compute_chargeable_days(interval.start, interval.end, &holidays, &personal);
        }
    }
}

fn check_window(start: NaiveDate, end: NaiveDate) -> PlannerResult<()> {
    let span = (end - start).num_days().abs() + 1;
    if span > MAX_WINDOW_DAYS {
        return Err(PlannerError::InvalidInput {
            field: "end".to_string(),
            message: format!(
                "window spans {} days; at most {} are allowed",
                span, MAX_WINDOW_DAYS
            ),
        });
    }
    Ok(())
}

fn missing_date(field: &str) -> PlannerError {
    PlannerError::InvalidInput {
        field: field.to_string(),
        message: "no date selected".to_string(),
    }
}

fn out_of_range(collection: &str, index: usize, len: usize) -> PlannerError {
    PlannerError::IndexOutOfRange {
        collection: collection.to_string(),
        index,
        len,
    }
}
