//! Response types for the vacation planner API.
//!
//! This module defines the JSON response bodies, the error response
//! structure, and the mapping from [`PlannerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::Locale;
use crate::error::PlannerError;
use crate::export::export_available;
use crate::models::{
    CustomVacationInterval, HolidayLookup, PersonalDay, PlannerWarning, Proposal, PtoSummary,
    TableStatus,
};
use crate::report::{Table, holidays_table, session_tables};
use crate::session::PlannerSession;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PlannerError> for ApiErrorResponse {
    fn from(error: PlannerError) -> Self {
        let message = error.to_string();
        match error {
            PlannerError::ConfigNotFound { .. } | PlannerError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            PlannerError::InvalidInput { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            PlannerError::IndexOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "INDEX_OUT_OF_RANGE",
                    message,
                    "The row may already have been deleted",
                ),
            },
            PlannerError::ProposalNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PROPOSAL_NOT_FOUND", message),
            },
            PlannerError::HolidayTableMissing { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("HOLIDAY_TABLE_MISSING", message),
            },
            PlannerError::ExportUnavailable => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "EXPORT_UNAVAILABLE",
                    message,
                    "Rebuild with the 'xlsx' feature to enable spreadsheet export",
                ),
            },
            PlannerError::ExportFailed { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("EXPORT_FAILED", message),
            },
        }
    }
}

/// Response body for `GET /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The requested year.
    pub year: i32,
    /// Whether the table is verified for `year` or a fallback.
    pub status: TableStatus,
    /// Warnings to show alongside the table.
    pub warnings: Vec<PlannerWarning>,
    /// Date, weekday and holiday name rows.
    pub table: Table,
}

impl HolidaysResponse {
    /// Builds the response from a lookup.
    pub fn new(lookup: &HolidayLookup, locale: Locale) -> Self {
        Self {
            year: lookup.year,
            status: lookup.status,
            warnings: lookup.warnings.clone(),
            table: holidays_table(lookup, locale),
        }
    }
}

/// A full view of the session, returned by every session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The year being planned.
    pub year: i32,
    /// The declared PTO total.
    pub total_pto: u32,
    /// Whether the holiday table is verified for `year`.
    pub holiday_status: TableStatus,
    /// Warnings the user should see.
    pub warnings: Vec<PlannerWarning>,
    /// The proposal catalog with inclusion flags.
    pub proposals: Vec<Proposal>,
    /// Personal days off.
    pub personal_days: Vec<PersonalDay>,
    /// Custom intervals with derived costs.
    pub custom_intervals: Vec<CustomVacationInterval>,
    /// Planned and remaining PTO.
    pub summary: PtoSummary,
    /// More PTO is planned than declared.
    pub overbooked: bool,
    /// Whether `GET /session/export` can produce a workbook.
    pub export_available: bool,
    /// Rendered tables, in export sheet order.
    pub tables: Vec<Table>,
}

impl From<&PlannerSession> for SessionSnapshot {
    fn from(session: &PlannerSession) -> Self {
        let summary = session.summary();
        Self {
            year: session.year(),
            total_pto: session.total_pto(),
            holiday_status: session.holidays().status,
            warnings: session.warnings().to_vec(),
            proposals: session.proposals().all().to_vec(),
            personal_days: session.personal_days().to_vec(),
            custom_intervals: session.custom_intervals().to_vec(),
            summary,
            overbooked: summary.is_overbooked(),
            export_available: export_available(),
            tables: session_tables(session),
        }
    }
}
