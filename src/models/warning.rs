//! Non-fatal warnings surfaced to the user.

use serde::{Deserialize, Serialize};

/// A warning generated while planning.
///
/// Warnings indicate conditions that don't prevent a result but that the
/// user should see, such as a holiday table borrowed from another year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl PlannerWarning {
    /// Warning for a year that has no curated holiday table.
    pub fn unsupported_year(requested: i32, used: i32) -> Self {
        Self {
            code: "UNSUPPORTED_YEAR".to_string(),
            message: format!(
                "No verified holiday table for {}; showing the {} table instead. \
                 Update the holiday table before relying on these dates.",
                requested, used
            ),
            severity: "high".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_year_mentions_both_years() {
        let warning = PlannerWarning::unsupported_year(2029, 2026);
        assert_eq!(warning.code, "UNSUPPORTED_YEAR");
        assert!(warning.message.contains("2029"));
        assert!(warning.message.contains("2026"));
        assert_eq!(warning.severity, "high");
    }
}
