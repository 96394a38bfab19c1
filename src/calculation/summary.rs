//! PTO summary aggregation.

use crate::models::{CustomVacationInterval, ProposalCatalog, PtoSummary};

/// Combines the declared total with the cost of included proposals and
/// custom intervals.
///
/// `remaining` is floored at zero when more PTO is planned than declared.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::summarize_costs;
///
/// let summary = summarize_costs(22, 8, 5);
/// assert_eq!(summary.planned, 13);
/// assert_eq!(summary.remaining, 9);
///
/// let summary = summarize_costs(5, 8, 5);
/// assert_eq!(summary.remaining, 0);
/// ```
pub fn summarize_costs(total: u32, proposals: u32, custom: u32) -> PtoSummary {
    let planned = proposals + custom;
    PtoSummary {
        total,
        proposals,
        custom,
        planned,
        remaining: total.saturating_sub(planned),
    }
}

/// Builds the summary from the current catalog and custom intervals.
pub fn summarize(
    total: u32,
    catalog: &ProposalCatalog,
    intervals: &[CustomVacationInterval],
) -> PtoSummary {
    let custom = intervals.iter().map(|i| i.pto_cost).sum();
    summarize_costs(total, catalog.included_cost(), custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Proposal;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    fn proposal(id: &str, cost: u32, included: bool) -> Proposal {
        Proposal {
            id: id.to_string(),
            start: d(1, 1),
            end: d(1, 7),
            pto_cost: cost,
            pto_dates: vec![],
            rationale: String::new(),
            idea: String::new(),
            included,
        }
    }

    fn interval(cost: u32) -> CustomVacationInterval {
        CustomVacationInterval {
            start: d(7, 6),
            end: d(7, 10),
            description: String::new(),
            pto_cost: cost,
        }
    }

    #[test]
    fn test_planned_and_remaining() {
        let summary = summarize_costs(22, 8, 5);
        assert_eq!(summary.planned, 13);
        assert_eq!(summary.remaining, 9);
        assert!(!summary.is_overbooked());
    }

    #[test]
    fn test_remaining_floored_at_zero() {
        let summary = summarize_costs(5, 8, 5);
        assert_eq!(summary.planned, 13);
        assert_eq!(summary.remaining, 0);
        assert!(summary.is_overbooked());
    }

    #[test]
    fn test_summarize_only_counts_included_proposals() {
        let catalog = ProposalCatalog::new(vec![
            proposal("a", 3, true),
            proposal("b", 5, true),
            proposal("c", 4, false),
        ]);
        let summary = summarize(22, &catalog, &[interval(2), interval(3)]);
        assert_eq!(summary.proposals, 8);
        assert_eq!(summary.custom, 5);
        assert_eq!(summary.planned, 13);
        assert_eq!(summary.remaining, 9);
    }

    #[test]
    fn test_summarize_empty_state() {
        let summary = summarize(22, &ProposalCatalog::default(), &[]);
        assert_eq!(summary.planned, 0);
        assert_eq!(summary.remaining, 22);
    }
}
