//! Core data models for the vacation planner.
//!
//! This module contains all the domain models used throughout the planner.

mod holiday;
mod personal_day;
mod proposal;
mod summary;
mod warning;

pub use holiday::{Holiday, HolidayLookup, TableStatus};
pub use personal_day::{CustomVacationInterval, PersonalDay};
pub use proposal::{Proposal, ProposalCatalog};
pub use summary::PtoSummary;
pub use warning::PlannerWarning;
