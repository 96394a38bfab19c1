//! HTTP request handlers for the vacation planner API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PlannerError, PlannerResult};
use crate::export::export_workbook;
use crate::holidays::HolidayProvider;
use crate::session::PlannerSession;

use super::request::{
    ChargeableDaysRequest, CustomIntervalRequest, DescriptionRequest, HolidaysQuery,
    LabelRequest, NewSessionRequest, PersonalDayRequest, ProposalToggleRequest, TotalPtoRequest,
};
use super::response::{ApiError, ApiErrorResponse, HolidaysResponse, SessionSnapshot};
use super::state::AppState;

/// Response header listing the warning codes of an exported session.
pub const WARNINGS_HEADER: &str = "x-planner-warnings";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/holidays", get(holidays_handler))
        .route("/chargeable-days", post(chargeable_days_handler))
        .route("/session", get(get_session_handler).post(new_session_handler))
        .route("/session/summary", get(summary_handler))
        .route("/session/export", get(export_handler))
        .route("/session/total-pto", put(total_pto_handler))
        .route("/session/personal-days", post(add_personal_day_handler))
        .route(
            "/session/personal-days/:index",
            patch(update_personal_day_handler).delete(remove_personal_day_handler),
        )
        .route("/session/proposals/:id", put(toggle_proposal_handler))
        .route("/session/custom-intervals", post(add_custom_interval_handler))
        .route(
            "/session/custom-intervals/:index",
            patch(update_custom_interval_handler).delete(remove_custom_interval_handler),
        )
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for GET /holidays.
///
/// Returns the holiday table for the requested year. A year without a curated
/// table gets the fallback table with an `UNSUPPORTED_YEAR` warning.
async fn holidays_handler(
    State(state): State<AppState>,
    Query(query): Query<HolidaysQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let settings = state.config().settings();
    let year = query.year.unwrap_or(settings.default_year);
    info!(correlation_id = %correlation_id, year, "Looking up holidays");

    let provider = HolidayProvider::new(state.config(), settings.fallback_year);
    match provider.lookup(year) {
        Ok(lookup) => json_ok(HolidaysResponse::new(&lookup, settings.locale)),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /chargeable-days.
///
/// Counts the PTO needed for a window against the session's holiday and
/// personal-day sets. Does not modify the session.
async fn chargeable_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChargeableDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = match state.session().chargeable_days(request.start, request.end) {
        Ok(result) => result,
        Err(err) => return error_response(err, correlation_id),
    };
    info!(
        correlation_id = %correlation_id,
        start = %result.start,
        end = %result.end,
        chargeable_days = result.chargeable_days,
        duration_us = start_time.elapsed().as_micros(),
        "Chargeable days computed"
    );
    json_ok(result)
}

/// Handler for GET /session.
async fn get_session_handler(State(state): State<AppState>) -> Response {
    let session = state.session();
    json_ok(SessionSnapshot::from(&*session))
}

/// Handler for POST /session.
///
/// Discards the current session and starts a new one for the given year.
async fn new_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewSessionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let year = request
        .year
        .unwrap_or(state.config().settings().default_year);
    match PlannerSession::new(state.config(), year) {
        Ok(session) => {
            let snapshot = SessionSnapshot::from(&session);
            state.reset_session(session);
            info!(correlation_id = %correlation_id, year, "Session reset");
            json_ok(snapshot)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /session/summary.
async fn summary_handler(State(state): State<AppState>) -> Response {
    json_ok(state.session().summary())
}

/// Handler for GET /session/export.
///
/// Returns the session as an XLSX workbook download. Session warnings are
/// listed in the summary sheet and in the `x-planner-warnings` header.
async fn export_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = export_workbook(&state.session());

    match result {
        Ok(artifact) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %artifact.file_name,
                "Export generated"
            );
            let warning_codes = artifact
                .warnings
                .iter()
                .map(|w| w.code.as_str())
                .collect::<Vec<_>>()
                .join(",");
            let mut response = (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, artifact.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", artifact.file_name),
                    ),
                ],
                artifact.bytes,
            )
                .into_response();
            if !warning_codes.is_empty() {
                if let Ok(value) = HeaderValue::from_str(&warning_codes) {
                    response.headers_mut().insert(WARNINGS_HEADER, value);
                }
            }
            response
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for PUT /session/total-pto.
async fn total_pto_handler(
    State(state): State<AppState>,
    payload: Result<Json<TotalPtoRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match parse_json(payload, correlation_id) {
        Ok(request) => apply(&state, correlation_id, "set_total_pto", |session| {
            session.set_total_pto(request.total_pto)
        }),
        Err(response) => response,
    }
}

/// Handler for POST /session/personal-days.
async fn add_personal_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<PersonalDayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match parse_json(payload, correlation_id) {
        Ok(request) => apply(&state, correlation_id, "add_personal_day", |session| {
            session.add_personal_day(request.date, request.label)
        }),
        Err(response) => response,
    }
}

/// Handler for PATCH /session/personal-days/:index.
async fn update_personal_day_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: Result<Json<LabelRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match parse_json(payload, correlation_id) {
        Ok(request) => apply(&state, correlation_id, "update_personal_day", |session| {
            session.update_personal_day_label(index, request.label)
        }),
        Err(response) => response,
    }
}

/// Handler for DELETE /session/personal-days/:index.
async fn remove_personal_day_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Response {
    apply(&state, Uuid::new_v4(), "remove_personal_day", |session| {
        session.remove_personal_day(index)
    })
}

/// Handler for PUT /session/proposals/:id.
async fn toggle_proposal_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProposalToggleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match parse_json(payload, correlation_id) {
        Ok(request) => apply(&state, correlation_id, "toggle_proposal", |session| {
            session.set_proposal_included(&id, request.included)
        }),
        Err(response) => response,
    }
}

/// Handler for POST /session/custom-intervals.
async fn add_custom_interval_handler(
    State(state): State<AppState>,
    payload: Result<Json<CustomIntervalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match parse_json(payload, correlation_id) {
        Ok(request) => apply(&state, correlation_id, "add_custom_interval", |session| {
            session.add_custom_interval(request.start, request.end, request.description)
        }),
        Err(response) => response,
    }
}

/// Handler for PATCH /session/custom-intervals/:index.
async fn update_custom_interval_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: Result<Json<DescriptionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match parse_json(payload, correlation_id) {
        Ok(request) => apply(&state, correlation_id, "update_custom_interval", |session| {
            session.update_custom_interval_description(index, request.description)
        }),
        Err(response) => response,
    }
}

/// Handler for DELETE /session/custom-intervals/:index.
async fn remove_custom_interval_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Response {
    apply(&state, Uuid::new_v4(), "remove_custom_interval", |session| {
        session.remove_custom_interval(index)
    })
}

/// Runs one session operation and responds with the updated snapshot.
///
/// A failed operation leaves the session unchanged and responds with the error.
fn apply<T>(
    state: &AppState,
    correlation_id: Uuid,
    action: &str,
    operation: impl FnOnce(&mut PlannerSession) -> PlannerResult<T>,
) -> Response {
    let mut session = state.session_mut();
    match operation(&mut *session) {
        Ok(_) => {
            let snapshot = SessionSnapshot::from(&*session);
            info!(
                correlation_id = %correlation_id,
                action,
                planned = snapshot.summary.planned,
                remaining = snapshot.summary.remaining,
                "Session updated"
            );
            json_ok(snapshot)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Unwraps a JSON body or builds the 400 response for a rejected one.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err((
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response())
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: PlannerError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}
