//! Bridge-vacation proposal models.
//!
//! This module contains the [`Proposal`] catalog entry and the [`ProposalCatalog`]
//! that holds the curated list for a year. Costs are authored constants; the
//! catalog never re-derives them from the accounting engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A curated bridge-vacation suggestion.
///
/// # Example
///
/// ```
/// use vacation_planner::models::Proposal;
/// use chrono::NaiveDate;
///
/// let proposal = Proposal {
///     id: "assumption".to_string(),
///     start: NaiveDate::from_ymd_opt(2026, 8, 14).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 8, 16).unwrap(),
///     pto_cost: 1,
///     pto_dates: vec![NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()],
///     rationale: "Sf. Maria falls on a Saturday".to_string(),
///     idea: "Weekend at the seaside".to_string(),
///     included: true,
/// };
///
/// assert_eq!(proposal.interval_label(), "2026-08-14 → 2026-08-16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Stable identifier used to toggle inclusion.
    pub id: String,
    /// First day of the vacation window (inclusive).
    pub start: NaiveDate,
    /// Last day of the vacation window (inclusive).
    pub end: NaiveDate,
    /// Authored number of PTO days the window costs.
    pub pto_cost: u32,
    /// The business days that must be taken as PTO.
    #[serde(default)]
    pub pto_dates: Vec<NaiveDate>,
    /// Why the window is a good bridge.
    pub rationale: String,
    /// A destination or activity suggestion.
    pub idea: String,
    /// Whether the user counts this proposal towards planned PTO.
    #[serde(default = "default_included")]
    pub included: bool,
}

fn default_included() -> bool {
    true
}

impl Proposal {
    /// Formats the window as `start → end`.
    pub fn interval_label(&self) -> String {
        format!("{} → {}", self.start, self.end)
    }
}

/// The fixed list of proposals for a year.
///
/// Only the `included` flag of each proposal is mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalCatalog {
    proposals: Vec<Proposal>,
}

impl ProposalCatalog {
    /// Creates a catalog from authored proposals, ordered by start date.
    pub fn new(mut proposals: Vec<Proposal>) -> Self {
        proposals.sort_by_key(|p| p.start);
        Self { proposals }
    }

    /// Returns every proposal.
    pub fn all(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Finds a proposal by id.
    pub fn get(&self, id: &str) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    /// Sets the inclusion flag of a proposal.
    ///
    /// Returns `false` if no proposal has the given id.
    pub fn set_included(&mut self, id: &str, included: bool) -> bool {
        match self.proposals.iter_mut().find(|p| p.id == id) {
            Some(proposal) => {
                proposal.included = included;
                true
            }
            None => false,
        }
    }

    /// Returns the proposals the user has included.
    pub fn included(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter().filter(|p| p.included)
    }

    /// Sums the authored cost of included proposals.
    pub fn included_cost(&self) -> u32 {
        self.included().map(|p| p.pto_cost).sum()
    }

    /// Returns the number of proposals.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// Returns `true` if the catalog has no proposals.
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
