//! Table builders for holidays, proposals, personal days, custom intervals
//! and the PTO summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labels::Labels;
use crate::calculation::{Locale, weekday_name};
use crate::models::HolidayLookup;
use crate::session::PlannerSession;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free text.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A calendar date.
    Date(NaiveDate),
    /// A yes/no flag.
    Bool(bool),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// A named table with a header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// The table (and sheet) name.
    pub name: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows; each row has one cell per header.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }
}

/// Statutory holidays: date, weekday name, holiday name.
///
/// The table is named after the year it actually lists, so a fallback table
/// never carries the requested year's name.
pub fn holidays_table(lookup: &HolidayLookup, locale: Locale) -> Table {
    let labels = Labels::for_locale(locale);
    let mut table = Table::new(
        format!("{} {}", labels.holidays_sheet, lookup.table_year()),
        &labels.holidays_headers,
    );
    for holiday in &lookup.holidays {
        table.push(vec![
            holiday.date.into(),
            weekday_name(holiday.date, locale).into(),
            holiday.name.as_str().into(),
        ]);
    }
    table
}

/// The proposal catalog with inclusion state.
pub fn proposals_table(session: &PlannerSession) -> Table {
    let labels = Labels::for_locale(session.locale());
    let mut table = Table::new(labels.proposals_sheet, &labels.proposals_headers);
    for proposal in session.proposals().all() {
        let pto_dates = proposal
            .pto_dates
            .iter()
            .map(|d| format!("{} ({})", d, weekday_name(*d, session.locale())))
            .collect::<Vec<_>>()
            .join(", ");
        table.push(vec![
            proposal.id.as_str().into(),
            proposal.interval_label().into(),
            pto_dates.into(),
            proposal.pto_cost.into(),
            proposal.included.into(),
            proposal.rationale.as_str().into(),
            proposal.idea.as_str().into(),
        ]);
    }
    table
}

/// Personal days off: date, weekday name, label.
pub fn personal_days_table(session: &PlannerSession) -> Table {
    let labels = Labels::for_locale(session.locale());
    let mut table = Table::new(labels.personal_sheet, &labels.personal_headers);
    for day in session.personal_days() {
        table.push(vec![
            day.date.into(),
            weekday_name(day.date, session.locale()).into(),
            day.label.as_str().into(),
        ]);
    }
    table
}

/// Custom intervals with their derived PTO cost.
pub fn custom_intervals_table(session: &PlannerSession) -> Table {
    let labels = Labels::for_locale(session.locale());
    let mut table = Table::new(labels.custom_sheet, &labels.custom_headers);
    for interval in session.custom_intervals() {
        table.push(vec![
            interval.start.into(),
            interval.end.into(),
            interval.description.as_str().into(),
            interval.pto_cost.into(),
        ]);
    }
    table
}

/// Indicator/value rows for total, planned and remaining PTO, followed by
/// one row per session warning.
pub fn summary_table(session: &PlannerSession) -> Table {
    let labels = Labels::for_locale(session.locale());
    let summary = session.summary();
    let mut table = Table::new(labels.summary_sheet, &labels.summary_headers);
    table.push(vec![labels.total.into(), summary.total.into()]);
    table.push(vec![labels.in_proposals.into(), summary.proposals.into()]);
    table.push(vec![labels.in_custom.into(), summary.custom.into()]);
    table.push(vec![labels.planned.into(), summary.planned.into()]);
    table.push(vec![labels.remaining.into(), summary.remaining.into()]);
    for warning in session.warnings() {
        table.push(vec![
            format!("{} ({})", labels.warning, warning.code).into(),
            warning.message.as_str().into(),
        ]);
    }
    table
}

/// Every table of a session, in export sheet order.
pub fn session_tables(session: &PlannerSession) -> Vec<Table> {
    vec![
        holidays_table(session.holidays(), session.locale()),
        proposals_table(session),
        personal_days_table(session),
        custom_intervals_table(session),
        summary_table(session),
    ]
}
