//! Error types for the vacation planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while planning PTO.

use thiserror::Error;

/// The main error type for the vacation planner.
///
/// Every failure is local and non-fatal: a session operation that returns an
/// error leaves the session unchanged.
///
/// # Example
///
/// ```
/// use vacation_planner::error::PlannerError;
///
/// let error = PlannerError::ConfigNotFound {
///     path: "/missing/planner.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/planner.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// User input was missing or outside its allowed range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A row index did not address an existing record.
    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        /// The collection that was addressed (e.g. "personal_days").
        collection: String,
        /// The requested index.
        index: usize,
        /// The current size of the collection.
        len: usize,
    },

    /// No proposal with the given id exists in the catalog.
    #[error("Proposal not found: {id}")]
    ProposalNotFound {
        /// The proposal id that was not found.
        id: String,
    },

    /// Neither the requested year nor the fallback year has a holiday table.
    #[error("No holiday table available for year {year}")]
    HolidayTableMissing {
        /// The requested year.
        year: i32,
    },

    /// The spreadsheet writer was not compiled into this build.
    #[error("Spreadsheet export is not available in this build")]
    ExportUnavailable,

    /// The spreadsheet writer failed to produce the workbook.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the writer failure.
        message: String,
    },
}

/// A type alias for Results that return PlannerError.
pub type PlannerResult<T> = Result<T, PlannerError>;
