//! PTO and bridge-vacation planner
//!
//! This crate counts the paid-time-off days a vacation window costs once
//! weekends, public holidays and personal days off are excluded, and builds
//! a year plan from a curated catalog of bridge proposals plus user-defined
//! intervals. The plan can be served over HTTP and exported as a workbook.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod holidays;
pub mod models;
pub mod report;
pub mod session;
