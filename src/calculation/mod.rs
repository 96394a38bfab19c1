//! Calculation logic for the vacation planner.
//!
//! This module contains the chargeable-day counter that turns a vacation window
//! into a PTO cost, day detection for the business-day test, and the summary
//! aggregation of planned and remaining PTO.

mod chargeable_days;
mod day_detection;
mod summary;

pub use chargeable_days::{ChargeableDaysResult, chargeable_breakdown, compute_chargeable_days};
pub use day_detection::{DayType, Locale, get_day_type, is_business_day, weekday_name};
pub use summary::{summarize, summarize_costs};
