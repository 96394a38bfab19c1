//! Integration tests for the vacation planner HTTP API.
//!
//! This test suite drives the router end to end:
//! - Holiday lookups for curated and unsupported years
//! - Chargeable-day queries against the session's date sets
//! - Session editing (total, proposals, personal days, custom intervals)
//! - Summary arithmetic
//! - Spreadsheet export
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use vacation_planner::api::{AppState, create_router};
use vacation_planner::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ro").expect("Failed to load config");
    AppState::new(config).expect("Failed to start session")
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn proposal<'a>(snapshot: &'a Value, id: &str) -> &'a Value {
    snapshot["proposals"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == id)
        .unwrap_or_else(|| panic!("proposal {} not found", id))
}

// =============================================================================
// Holidays
// =============================================================================

#[tokio::test]
async fn test_holidays_for_curated_year_are_verified() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "GET", "/holidays?year=2026", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2026);
    assert_eq!(body["status"]["kind"], "verified");
    assert!(body["warnings"].as_array().unwrap().is_empty());
    assert_eq!(body["table"]["rows"].as_array().unwrap().len(), 17);
    assert_eq!(body["table"]["rows"][0][0], "2026-01-01");
}

#[tokio::test]
async fn test_holidays_default_to_configured_year() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "GET", "/holidays", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2026);
}

#[tokio::test]
async fn test_holidays_for_unsupported_year_fall_back_with_warning() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "GET", "/holidays?year=2027", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2027);
    assert_eq!(body["status"]["kind"], "fallback");
    assert_eq!(body["status"]["requested"], 2027);
    assert_eq!(body["status"]["used"], 2026);

    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "UNSUPPORTED_YEAR");
    assert_eq!(warnings[0]["severity"], "high");
}

// =============================================================================
// Chargeable days
// =============================================================================

#[tokio::test]
async fn test_new_year_bridge_costs_one_day() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/chargeable-days",
        Some(json!({ "start": "2026-01-01", "end": "2026-01-07" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Jan 1, 2, 6 and 7 are holidays; only Monday Jan 5 is charged
    assert_eq!(body["chargeable_days"], 1);
    assert_eq!(body["chargeable_dates"], json!(["2026-01-05"]));
    assert_eq!(body["holiday_days"], 4);
    assert_eq!(body["weekend_days"], 2);
}

#[tokio::test]
async fn test_chargeable_days_excludes_personal_days() {
    let router = create_router_for_test();
    let window = json!({ "start": "2026-03-02", "end": "2026-03-06" });

    let (_, before) = send(&router, "POST", "/chargeable-days", Some(window.clone())).await;
    assert_eq!(before["chargeable_days"], 5);

    let (status, _) = send(
        &router,
        "POST",
        "/session/personal-days",
        Some(json!({ "date": "2026-03-04", "label": "Dentist" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&router, "POST", "/chargeable-days", Some(window)).await;
    assert_eq!(after["chargeable_days"], 4);
    assert_eq!(after["personal_days"], 1);
}

#[tokio::test]
async fn test_chargeable_days_single_weekend_is_free() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/chargeable-days",
        Some(json!({ "start": "2026-03-07", "end": "2026-03-08" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chargeable_days"], 0);
}

#[tokio::test]
async fn test_overlong_windows_are_rejected() {
    let router = create_router_for_test();
    let window = json!({ "start": "2026-01-01", "end": "2040-12-31", "description": "" });

    let (status, body) = send(&router, "POST", "/chargeable-days", Some(window.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = send(&router, "POST", "/session/custom-intervals", Some(window)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, session) = send(&router, "GET", "/session", None).await;
    assert!(session["custom_intervals"].as_array().unwrap().is_empty());
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_default_session_includes_whole_catalog() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "GET", "/session", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["proposals"].as_array().unwrap().len(), 7);
    assert_eq!(body["summary"]["total"], 22);
    assert_eq!(body["summary"]["proposals"], 9);
    assert_eq!(body["summary"]["custom"], 0);
    assert_eq!(body["summary"]["planned"], 9);
    assert_eq!(body["summary"]["remaining"], 13);
    assert_eq!(body["overbooked"], false);
}

#[tokio::test]
async fn test_toggle_proposal_updates_summary() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "PUT",
        "/session/proposals/easter",
        Some(json!({ "included": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(proposal(&body, "easter")["included"], false);
    assert_eq!(body["summary"]["proposals"], 7);
    assert_eq!(body["summary"]["remaining"], 15);
}

#[tokio::test]
async fn test_toggle_unknown_proposal_returns_404() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "PUT",
        "/session/proposals/midsummer",
        Some(json!({ "included": true })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROPOSAL_NOT_FOUND");
}

#[tokio::test]
async fn test_overbooked_plan_clamps_remaining_to_zero() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "PUT",
        "/session/total-pto",
        Some(json!({ "total_pto": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["planned"], 9);
    assert_eq!(body["summary"]["remaining"], 0);
    assert_eq!(body["overbooked"], true);
}

#[tokio::test]
async fn test_total_pto_out_of_bounds_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "PUT",
        "/session/total-pto",
        Some(json!({ "total_pto": 61 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, session) = send(&router, "GET", "/session", None).await;
    assert_eq!(session["total_pto"], 22);
}

#[tokio::test]
async fn test_total_pto_wrong_type_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "PUT",
        "/session/total-pto",
        Some(json!({ "total_pto": "many" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_personal_day_lifecycle() {
    let router = create_router_for_test();

    let (status, body) = send(
        &router,
        "POST",
        "/session/personal-days",
        Some(json!({ "date": "2026-09-14", "label": "Birthday" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personal_days"][0]["date"], "2026-09-14");

    let (status, body) = send(
        &router,
        "PATCH",
        "/session/personal-days/0",
        Some(json!({ "label": "Name day" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personal_days"][0]["label"], "Name day");

    let (status, body) = send(&router, "DELETE", "/session/personal-days/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["personal_days"].as_array().unwrap().is_empty());

    let (status, body) = send(&router, "DELETE", "/session/personal-days/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "INDEX_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_personal_day_without_date_is_a_no_op() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/session/personal-days",
        Some(json!({ "label": "Forgot the date" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, session) = send(&router, "GET", "/session", None).await;
    assert!(session["personal_days"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_custom_interval_cost_and_summary() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/session/custom-intervals",
        Some(json!({
            "start": "2026-07-17",
            "end": "2026-07-06",
            "description": "Summer"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let interval = &body["custom_intervals"][0];
    assert_eq!(interval["start"], "2026-07-06");
    assert_eq!(interval["end"], "2026-07-17");
    assert_eq!(interval["pto_cost"], 10);
    assert_eq!(body["summary"]["custom"], 10);
    assert_eq!(body["summary"]["planned"], 19);
    assert_eq!(body["summary"]["remaining"], 3);
}

#[tokio::test]
async fn test_custom_interval_cost_follows_personal_days() {
    let router = create_router_for_test();
    send(
        &router,
        "POST",
        "/session/custom-intervals",
        Some(json!({ "start": "2026-07-06", "end": "2026-07-17", "description": "" })),
    )
    .await;

    let (_, body) = send(
        &router,
        "POST",
        "/session/personal-days",
        Some(json!({ "date": "2026-07-08", "label": "" })),
    )
    .await;
    assert_eq!(body["custom_intervals"][0]["pto_cost"], 9);

    let (_, body) = send(&router, "DELETE", "/session/personal-days/0", None).await;
    assert_eq!(body["custom_intervals"][0]["pto_cost"], 10);
}

#[tokio::test]
async fn test_custom_interval_missing_end_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/session/custom-intervals",
        Some(json!({ "start": "2026-07-06", "description": "Open ended" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("end"));
}

#[tokio::test]
async fn test_custom_interval_description_update_and_delete() {
    let router = create_router_for_test();
    send(
        &router,
        "POST",
        "/session/custom-intervals",
        Some(json!({ "start": "2026-10-05", "end": "2026-10-09", "description": "Autumn" })),
    )
    .await;

    let (status, body) = send(
        &router,
        "PATCH",
        "/session/custom-intervals/0",
        Some(json!({ "description": "Mountains" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["custom_intervals"][0]["description"], "Mountains");

    let (status, _) = send(
        &router,
        "PATCH",
        "/session/custom-intervals/4",
        Some(json!({ "description": "Nowhere" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&router, "DELETE", "/session/custom-intervals/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["custom"], 0);
}

#[tokio::test]
async fn test_summary_endpoint() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "GET", "/session/summary", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({
        "total": 22,
        "proposals": 9,
        "custom": 0,
        "planned": 9,
        "remaining": 13
    }));
}

#[tokio::test]
async fn test_new_session_for_unsupported_year() {
    let router = create_router_for_test();
    send(
        &router,
        "PUT",
        "/session/total-pto",
        Some(json!({ "total_pto": 30 })),
    )
    .await;

    let (status, body) = send(&router, "POST", "/session", Some(json!({ "year": 2028 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2028);
    assert_eq!(body["total_pto"], 22);
    assert_eq!(body["holiday_status"]["kind"], "fallback");
    assert_eq!(body["warnings"][0]["code"], "UNSUPPORTED_YEAR");
    assert!(body["proposals"].as_array().unwrap().is_empty());
    assert_eq!(body["summary"]["planned"], 0);
}

#[tokio::test]
async fn test_new_session_outside_year_range_keeps_current_session() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "POST", "/session", Some(json!({ "year": 2040 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, session) = send(&router, "GET", "/session", None).await;
    assert_eq!(session["year"], 2026);
}

// =============================================================================
// Export
// =============================================================================

#[cfg(feature = "xlsx")]
#[tokio::test]
async fn test_export_returns_workbook() {
    use axum::http::header;

    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/session/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("vacation_plan_2026.xlsx"));
    assert!(
        response
            .headers()
            .get(vacation_planner::api::WARNINGS_HEADER)
            .is_none()
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[cfg(feature = "xlsx")]
#[tokio::test]
async fn test_export_for_unsupported_year_carries_warning() {
    use vacation_planner::api::WARNINGS_HEADER;

    let router = create_router_for_test();
    let (status, _) = send(&router, "POST", "/session", Some(json!({ "year": 2028 }))).await;
    assert_eq!(status, StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/session/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[WARNINGS_HEADER], "UNSUPPORTED_YEAR");

    let (_, session) = send(&router, "GET", "/session", None).await;
    let holidays_sheet = &session["tables"][0];
    assert_eq!(holidays_sheet["name"], "Zile libere 2026");
    let summary_rows = session["tables"][4]["rows"].as_array().unwrap();
    assert_eq!(summary_rows.last().unwrap()[0], "Avertisment (UNSUPPORTED_YEAR)");
}
