//! Configuration loading and management for the vacation planner.
//!
//! This module provides functionality to load planner settings, holiday tables,
//! and proposal catalogs from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_planner::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ro").unwrap();
//! println!("Planning for: {}", config.settings().country_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidayFile, PlannerConfig, PlannerSettings, ProposalFile, PtoBounds, YearRange,
};
