//! Request types for the vacation planner API.
//!
//! Dates are optional wherever a user picks them, so a missing date reaches
//! the session and is reported as a validation warning rather than a parse error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /holidays`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysQuery {
    /// The year to look up; defaults to the configured year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Request body for `POST /session`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSessionRequest {
    /// The year to plan for; defaults to the configured year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Request body for `PUT /session/total-pto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalPtoRequest {
    /// The new PTO total.
    pub total_pto: u32,
}

/// Request body for `POST /session/personal-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalDayRequest {
    /// The day off.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// A free-text label.
    #[serde(default)]
    pub label: String,
}

/// Request body for `PATCH /session/personal-days/:index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRequest {
    /// The new label.
    pub label: String,
}

/// Request body for `PUT /session/proposals/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalToggleRequest {
    /// Whether the proposal counts towards planned PTO.
    pub included: bool,
}

/// Request body for `POST /session/custom-intervals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomIntervalRequest {
    /// First day of the window.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last day of the window.
    #[serde(default)]
    pub end: Option<NaiveDate>,
    /// A free-text description.
    #[serde(default)]
    pub description: String,
}

/// Request body for `PATCH /session/custom-intervals/:index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRequest {
    /// The new description.
    pub description: String,
}

/// Request body for `POST /chargeable-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeableDaysRequest {
    /// One end of the window.
    pub start: NaiveDate,
    /// The other end of the window.
    pub end: NaiveDate,
}
