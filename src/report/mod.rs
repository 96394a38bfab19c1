//! Tabular views of a planner session.
//!
//! Both the HTTP API and the spreadsheet export render from these tables, so
//! the two surfaces always show the same rows.

mod labels;
mod tables;

pub use tables::{
    Cell, Table, custom_intervals_table, holidays_table, personal_days_table, proposals_table,
    session_tables, summary_table,
};
