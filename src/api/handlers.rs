//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::chargeable_days;
use crate::models::{Holiday, HolidayCalendar, LeaveBalance};

use super::request::{
    BalanceRequest, CalculateRequest, DecideRequest, HolidayRequest, SubmitRequest,
};
use super::response::{ApiError, ApiErrorResponse, CalculateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/leave-requests", post(submit_handler))
        .route("/leave-requests/:id", get(get_request_handler))
        .route("/leave-requests/:id/decision", post(decide_handler))
        .route("/holidays", get(list_holidays_handler).post(add_holiday_handler))
        .route("/holidays/:date", delete(remove_holiday_handler))
        .route(
            "/balances/:employee_id",
            get(get_balance_handler).put(set_balance_handler),
        )
        .route("/notifications/:recipient", get(list_notifications_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into the API error body.
fn rejection_to_api_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

/// Handler for POST /calculate.
///
/// Runs the working-day calculator for a date range against either an
/// inline holiday list or the organization calendar.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_api_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Inline holidays override the organization calendar for this call
    let calendar = match request.holidays {
        Some(holidays) => {
            let holidays: Vec<Holiday> = holidays.into_iter().map(Into::into).collect();
            match HolidayCalendar::from_holidays(holidays) {
                Ok(calendar) => calendar,
                Err(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "Invalid inline holidays");
                    let api_error: ApiErrorResponse = err.into();
                    return api_error.into_response();
                }
            }
        }
        None => state.holidays(),
    };

    match chargeable_days(request.from_date, request.to_date, request.session, &calendar) {
        Ok(total_days) => {
            info!(
                correlation_id = %correlation_id,
                from_date = %request.from_date,
                to_date = %request.to_date,
                total_days = %total_days,
                "Calculation completed"
            );
            Json(CalculateResponse {
                from_date: request.from_date,
                to_date: request.to_date,
                session: request.session,
                total_days,
            })
            .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /leave-requests.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_api_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Fresh calendar snapshot per submission; no caching contract
    let calendar = state.holidays();
    match state.workflow().submit(
        &request.requester,
        request.leave_type,
        request.from_date,
        request.to_date,
        request.session,
        &calendar,
    ) {
        Ok(leave_request) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %leave_request.id,
                requester = %leave_request.requester,
                total_days = %leave_request.total_days,
                "Leave request submitted"
            );
            (StatusCode::CREATED, Json(leave_request)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave submission failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /leave-requests/:id.
async fn get_request_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.workflow().request(id) {
        Some(request) => Json(request).into_response(),
        None => {
            let api_error: ApiErrorResponse =
                crate::error::LeaveError::RequestNotFound { request_id: id }.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /leave-requests/:id/decision.
async fn decide_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecideRequest>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        request_id = %id,
        reviewer = %request.reviewer,
        "Processing leave decision"
    );

    match state.workflow().decide(
        id,
        request.decision,
        request.rejection_reason,
        &request.reviewer,
    ) {
        Ok(decided) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %decided.id,
                status = %decided.status,
                "Leave request decided"
            );
            Json(decided).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave decision failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /holidays.
async fn list_holidays_handler(State(state): State<AppState>) -> impl IntoResponse {
    let holidays: Vec<Holiday> = state.holidays().iter().cloned().collect();
    Json(holidays)
}

/// Handler for POST /holidays.
async fn add_holiday_handler(
    State(state): State<AppState>,
    Json(request): Json<HolidayRequest>,
) -> impl IntoResponse {
    let holiday: Holiday = request.into();
    let date = holiday.date;
    match state.with_holidays_mut(|calendar| calendar.add(holiday)) {
        Ok(()) => {
            info!(date = %date, "Holiday declared");
            StatusCode::CREATED.into_response()
        }
        Err(err) => {
            warn!(date = %date, error = %err, "Holiday declaration failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for DELETE /holidays/:date.
async fn remove_holiday_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    match state.with_holidays_mut(|calendar| calendar.remove(date)) {
        Ok(removed) => Json(removed).into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /balances/:employee_id.
async fn get_balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.workflow().balance(&employee_id) {
        Some(balance) => Json(balance).into_response(),
        None => {
            let api_error: ApiErrorResponse =
                crate::error::LeaveError::BalanceNotFound { employee_id }.into();
            api_error.into_response()
        }
    }
}

/// Handler for PUT /balances/:employee_id.
async fn set_balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(request): Json<BalanceRequest>,
) -> impl IntoResponse {
    let balance: LeaveBalance = request.into();
    state.workflow().set_balance(&employee_id, balance);
    info!(employee_id = %employee_id, "Leave balance replaced");
    Json(balance)
}

/// Handler for GET /notifications/:recipient.
async fn list_notifications_handler(
    State(state): State<AppState>,
    Path(recipient): Path<String>,
) -> impl IntoResponse {
    Json(state.workflow().notifications_for(&recipient))
}
