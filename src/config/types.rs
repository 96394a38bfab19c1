//! Configuration types for the vacation planner.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::calculation::Locale;
use crate::models::{Holiday, Proposal};

/// Bounds and default for the declared PTO total.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PtoBounds {
    /// The total used when a session starts.
    pub default_total: u32,
    /// Smallest accepted total.
    pub min_total: u32,
    /// Largest accepted total.
    pub max_total: u32,
}

impl PtoBounds {
    /// Checks if a total lies within the bounds (inclusive).
    pub fn contains(&self, total: u32) -> bool {
        total >= self.min_total && total <= self.max_total
    }
}

/// The range of years a user may plan for.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YearRange {
    /// First selectable year.
    pub min: i32,
    /// Last selectable year.
    pub max: i32,
}

impl YearRange {
    /// Checks if a year lies within the range (inclusive).
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

/// Planner settings from planner.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerSettings {
    /// ISO country code the holiday tables belong to (e.g., "RO").
    pub country: String,
    /// Human-readable country name.
    pub country_name: String,
    /// Language of weekday names in tables.
    #[serde(default)]
    pub locale: Locale,
    /// The year a new session plans for.
    pub default_year: i32,
    /// The year whose holiday table stands in for years without data.
    pub fallback_year: i32,
    /// Years a session may be created for.
    pub years: YearRange,
    /// PTO total bounds.
    pub pto: PtoBounds,
}

/// A holiday file (holidays/<year>.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year every entry belongs to.
    pub year: i32,
    /// The curated holiday entries.
    pub holidays: Vec<Holiday>,
}

/// A proposal catalog file (proposals/<year>.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct ProposalFile {
    /// The year the proposals are authored for.
    pub year: i32,
    /// The curated proposals.
    pub proposals: Vec<Proposal>,
}

/// The complete planner configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    settings: PlannerSettings,
    holidays: BTreeMap<i32, Vec<Holiday>>,
    proposals: BTreeMap<i32, Vec<Proposal>>,
}

impl PlannerConfig {
    /// Creates a new PlannerConfig from its component parts.
    pub fn new(
        settings: PlannerSettings,
        holidays: BTreeMap<i32, Vec<Holiday>>,
        proposals: BTreeMap<i32, Vec<Proposal>>,
    ) -> Self {
        Self {
            settings,
            holidays,
            proposals,
        }
    }

    /// Returns the planner settings.
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Returns the holiday tables keyed by year.
    pub fn holidays(&self) -> &BTreeMap<i32, Vec<Holiday>> {
        &self.holidays
    }

    /// Returns the proposal catalogs keyed by year.
    pub fn proposals(&self) -> &BTreeMap<i32, Vec<Proposal>> {
        &self.proposals
    }
}
