//! PTO summary model.

use serde::{Deserialize, Serialize};

/// Aggregated PTO usage derived from the current session state.
///
/// Never stored; recomputed on every query.
///
/// # Example
///
/// ```
/// use vacation_planner::models::PtoSummary;
///
/// let summary = PtoSummary {
///     total: 22,
///     proposals: 8,
///     custom: 5,
///     planned: 13,
///     remaining: 9,
/// };
/// assert!(!summary.is_overbooked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PtoSummary {
    /// Total PTO days declared by the user.
    pub total: u32,
    /// PTO consumed by included proposals.
    pub proposals: u32,
    /// PTO consumed by custom intervals.
    pub custom: u32,
    /// `proposals + custom`.
    pub planned: u32,
    /// `max(0, total - planned)`.
    pub remaining: u32,
}

impl PtoSummary {
    /// Returns `true` if more PTO is planned than declared.
    pub fn is_overbooked(&self) -> bool {
        self.planned > self.total
    }
}
