//! HTTP API module for the vacation planner.
//!
//! This module provides the REST API endpoints for viewing holidays, editing
//! the planning session, and downloading the spreadsheet export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{WARNINGS_HEADER, create_router};
pub use request::{
    ChargeableDaysRequest, CustomIntervalRequest, DescriptionRequest, HolidaysQuery,
    LabelRequest, NewSessionRequest, PersonalDayRequest, ProposalToggleRequest, TotalPtoRequest,
};
pub use response::{ApiError, ApiErrorResponse, HolidaysResponse, SessionSnapshot};
pub use state::AppState;
