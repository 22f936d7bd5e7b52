//! Response types for the Leave Engine API.
//!
//! This module defines the error response structures and the mapping from
//! the engine's error taxonomy onto HTTP status codes. The mapping keeps
//! every business failure distinct rather than collapsing them to a
//! generic error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LeaveError;
use crate::models::Session;

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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body for the `POST /calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// First calendar day of the calculated range (inclusive).
    pub from_date: NaiveDate,
    /// Last calendar day of the calculated range (inclusive).
    pub to_date: NaiveDate,
    /// The session the calculation was performed for.
    pub session: Session,
    /// The chargeable leave days for the range.
    pub total_days: Decimal,
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

impl From<LeaveError> for ApiErrorResponse {
    fn from(error: LeaveError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            LeaveError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, "INVALID_RANGE"),
            LeaveError::PastDateNotAllowed { .. } => {
                (StatusCode::BAD_REQUEST, "PAST_DATE_NOT_ALLOWED")
            }
            LeaveError::NoChargeableDays { .. } => {
                (StatusCode::BAD_REQUEST, "NO_CHARGEABLE_DAYS")
            }
            LeaveError::MissingReason { .. } => (StatusCode::BAD_REQUEST, "MISSING_REASON"),
            LeaveError::InsufficientBalance { .. } => {
                (StatusCode::CONFLICT, "INSUFFICIENT_BALANCE")
            }
            LeaveError::AlreadyProcessed { .. } => (StatusCode::CONFLICT, "ALREADY_PROCESSED"),
            LeaveError::DuplicateHoliday { .. } => (StatusCode::CONFLICT, "DUPLICATE_HOLIDAY"),
            LeaveError::RequestNotFound { .. } => (StatusCode::NOT_FOUND, "REQUEST_NOT_FOUND"),
            LeaveError::BalanceNotFound { .. } => (StatusCode::NOT_FOUND, "BALANCE_NOT_FOUND"),
            LeaveError::HolidayNotFound { .. } => (StatusCode::NOT_FOUND, "HOLIDAY_NOT_FOUND"),
            LeaveError::ConfigNotFound { .. } | LeaveError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}
