//! Integration tests for the Leave Engine HTTP API.
//!
//! This test suite covers the full surface through the router:
//! - Working-day calculation (Sundays, holidays, half sessions)
//! - Leave submission and its validation pipeline
//! - Approval/rejection with balance deduction and notifications
//! - Holiday calendar administration
//! - Error cases and their HTTP mappings
//!
//! Submissions go through the real clock, so leave ranges use dates far in
//! the future (2099-01-01 is a Thursday; 2099-01-04 and 2099-01-11 are
//! Sundays). The pure /calculate endpoint has no past-date rule and uses
//! 2026 dates.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use leave_engine::api::{create_router, AppState};
use leave_engine::config::HolidayLoader;
use leave_engine::models::{Holiday, HolidayCalendar, HolidayType};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    // 2099-01-12 is a Monday
    let calendar = HolidayCalendar::from_holidays(vec![Holiday {
        date: chrono::NaiveDate::from_ymd_opt(2099, 1, 12).unwrap(),
        name: "Foundation Day".to_string(),
        holiday_type: HolidayType::Public,
        description: None,
    }])
    .expect("valid test calendar");
    AppState::new(calendar)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn set_balance(router: Router, employee_id: &str, casual: &str, sick: &str, earned: &str) {
    let (status, _) = send(
        router,
        "PUT",
        &format!("/balances/{}", employee_id),
        Some(json!({ "casual": casual, "sick": sick, "earned": earned })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

fn submit_body(leave_type: &str, from: &str, to: &str, session: &str) -> Value {
    json!({
        "requester": "emp_001",
        "leave_type": leave_type,
        "from_date": from,
        "to_date": to,
        "session": session
    })
}

// =============================================================================
// /calculate
// =============================================================================

#[tokio::test]
async fn test_calculate_excludes_sunday_and_holiday() {
    // Saturday 2026-01-24 through Monday 2026-01-26 with Republic Day on the
    // Monday: only the Saturday is chargeable.
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({
            "from_date": "2026-01-24",
            "to_date": "2026-01-26",
            "session": "full_day",
            "holidays": [
                { "date": "2026-01-26", "name": "Republic Day", "type": "public" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_days"], "1");
}

#[tokio::test]
async fn test_calculate_all_excluded_range_is_zero() {
    // Sunday 2026-01-25 through holiday 2026-01-26
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({
            "from_date": "2026-01-25",
            "to_date": "2026-01-26",
            "holidays": [
                { "date": "2026-01-26", "name": "Republic Day", "type": "public" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_days"], "0");
}

#[tokio::test]
async fn test_calculate_single_day_half_session() {
    // 2026-01-27 is a Tuesday
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({
            "from_date": "2026-01-27",
            "to_date": "2026-01-27",
            "session": "half_morning",
            "holidays": []
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_days"], "0.5");
}

#[tokio::test]
async fn test_calculate_multi_day_half_session_not_prorated() {
    // Tuesday through Thursday keeps the full 3-day charge
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({
            "from_date": "2026-01-27",
            "to_date": "2026-01-29",
            "session": "half_afternoon",
            "holidays": []
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_days"], "3");
}

#[tokio::test]
async fn test_calculate_uses_organization_calendar_by_default() {
    // Foundation Day 2099-01-12 is in the state's calendar; the surrounding
    // Sunday 2099-01-11 is excluded as well, leaving Friday and Saturday.
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({
            "from_date": "2099-01-09",
            "to_date": "2099-01-12"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_days"], "2");
}

#[tokio::test]
async fn test_calculate_reversed_range_is_invalid() {
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({
            "from_date": "2026-01-26",
            "to_date": "2026-01-24"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_calculate_missing_field_is_validation_error() {
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/calculate",
        Some(json!({ "from_date": "2026-01-24" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_calculate_malformed_json_is_rejected() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Leave submission
// =============================================================================

#[tokio::test]
async fn test_submit_creates_pending_request() {
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "8", "10", "15").await;

    // Monday 2099-01-05 through Tuesday 2099-01-06
    let (status, body) = send(
        router.clone(),
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2099-01-05", "2099-01-06", "full_day")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_days"], "2");
    assert_eq!(body["requester"], "emp_001");

    // The persisted request is retrievable by id
    let id = body["id"].as_str().unwrap();
    let (status, fetched) = send(
        router,
        "GET",
        &format!("/leave-requests/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], body["id"]);
}

#[tokio::test]
async fn test_submit_past_date_is_rejected() {
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "8", "10", "15").await;

    let (status, body) = send(
        router,
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2020-01-06", "2020-01-07", "full_day")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "PAST_DATE_NOT_ALLOWED");
}

#[tokio::test]
async fn test_submit_all_excluded_range_is_rejected() {
    // Sunday 2099-01-11 and Foundation Day 2099-01-12
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "8", "10", "15").await;

    let (status, body) = send(
        router,
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2099-01-11", "2099-01-12", "full_day")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NO_CHARGEABLE_DAYS");
}

#[tokio::test]
async fn test_submit_half_day_against_fractional_balance() {
    // A half-day request against a 0.3 casual balance is short by 0.2
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "0.3", "0", "0").await;

    let (status, body) = send(
        router,
        "POST",
        "/leave-requests",
        Some(submit_body(
            "casual",
            "2099-01-06",
            "2099-01-06",
            "half_morning",
        )),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");
}

#[tokio::test]
async fn test_submit_loss_of_pay_needs_no_balance() {
    let router = create_router_for_test();

    let (status, body) = send(
        router,
        "POST",
        "/leave-requests",
        Some(submit_body(
            "loss_of_pay",
            "2099-01-05",
            "2099-01-09",
            "full_day",
        )),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_days"], "5");
}

#[tokio::test]
async fn test_submit_paid_leave_without_balance_record() {
    let router = create_router_for_test();

    let (status, body) = send(
        router,
        "POST",
        "/leave-requests",
        Some(submit_body("sick", "2099-01-05", "2099-01-05", "full_day")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BALANCE_NOT_FOUND");
}

// =============================================================================
// Decisions
// =============================================================================

#[tokio::test]
async fn test_approval_deducts_balance_and_notifies() {
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "2", "0", "0").await;

    let (_, submitted) = send(
        router.clone(),
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2099-01-05", "2099-01-06", "full_day")),
    )
    .await;
    let id = submitted["id"].as_str().unwrap().to_string();

    let (status, decided) = send(
        router.clone(),
        "POST",
        &format!("/leave-requests/{}/decision", id),
        Some(json!({ "decision": "approve", "reviewer": "lead_001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "approved");
    assert_eq!(decided["decided_by"], "lead_001");

    let (_, balance) = send(router.clone(), "GET", "/balances/emp_001", None).await;
    assert_eq!(balance["casual"], "0");

    let (_, notifications) = send(router, "GET", "/notifications/emp_001", None).await;
    let notifications = notifications.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0]["message"]
        .as_str()
        .unwrap()
        .contains("approved"));
}

#[tokio::test]
async fn test_second_decision_conflicts() {
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "2", "0", "0").await;

    let (_, submitted) = send(
        router.clone(),
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2099-01-05", "2099-01-06", "full_day")),
    )
    .await;
    let id = submitted["id"].as_str().unwrap().to_string();
    let decision_uri = format!("/leave-requests/{}/decision", id);

    let (status, _) = send(
        router.clone(),
        "POST",
        &decision_uri,
        Some(json!({ "decision": "approve", "reviewer": "lead_001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        router.clone(),
        "POST",
        &decision_uri,
        Some(json!({ "decision": "approve", "reviewer": "lead_002" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_PROCESSED");

    // The balance was deducted exactly once
    let (_, balance) = send(router, "GET", "/balances/emp_001", None).await;
    assert_eq!(balance["casual"], "0");
}

#[tokio::test]
async fn test_rejection_requires_reason() {
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "8", "0", "0").await;

    let (_, submitted) = send(
        router.clone(),
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2099-01-05", "2099-01-06", "full_day")),
    )
    .await;
    let id = submitted["id"].as_str().unwrap().to_string();
    let decision_uri = format!("/leave-requests/{}/decision", id);

    let (status, body) = send(
        router.clone(),
        "POST",
        &decision_uri,
        Some(json!({ "decision": "reject", "reviewer": "lead_001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_REASON");

    let (status, decided) = send(
        router.clone(),
        "POST",
        &decision_uri,
        Some(json!({
            "decision": "reject",
            "rejection_reason": "Coverage needed",
            "reviewer": "lead_001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "rejected");
    assert_eq!(decided["rejection_reason"], "Coverage needed");

    // Rejection leaves the balance untouched
    let (_, balance) = send(router, "GET", "/balances/emp_001", None).await;
    assert_eq!(balance["casual"], "8");
}

#[tokio::test]
async fn test_decide_unknown_request_is_not_found() {
    let router = create_router_for_test();
    let (status, body) = send(
        router,
        "POST",
        "/leave-requests/00000000-0000-0000-0000-000000000000/decision",
        Some(json!({ "decision": "approve", "reviewer": "lead_001" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "REQUEST_NOT_FOUND");
}

// =============================================================================
// Holiday administration
// =============================================================================

#[tokio::test]
async fn test_holiday_lifecycle() {
    let router = create_router_for_test();

    let (status, _) = send(
        router.clone(),
        "POST",
        "/holidays",
        Some(json!({ "date": "2099-03-02", "name": "Founders Day", "type": "festival" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // A second holiday on the same day violates the one-per-day invariant
    let (status, body) = send(
        router.clone(),
        "POST",
        "/holidays",
        Some(json!({ "date": "2099-03-02", "name": "Another Day" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_HOLIDAY");

    let (status, holidays) = send(router.clone(), "GET", "/holidays", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = holidays
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Founders Day"));
    assert!(names.contains(&"Foundation Day"));

    let (status, removed) = send(router.clone(), "DELETE", "/holidays/2099-03-02", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["name"], "Founders Day");

    let (status, body) = send(router, "DELETE", "/holidays/2099-03-02", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "HOLIDAY_NOT_FOUND");
}

#[tokio::test]
async fn test_declared_holiday_affects_later_submissions() {
    let router = create_router_for_test();
    set_balance(router.clone(), "emp_001", "8", "0", "0").await;

    // Declare Tuesday 2099-01-06 a holiday, then request exactly that day
    let (status, _) = send(
        router.clone(),
        "POST",
        "/holidays",
        Some(json!({ "date": "2099-01-06", "name": "Audit Day" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        router,
        "POST",
        "/leave-requests",
        Some(submit_body("casual", "2099-01-06", "2099-01-06", "full_day")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NO_CHARGEABLE_DAYS");
}

// =============================================================================
// Balances and configuration
// =============================================================================

#[tokio::test]
async fn test_balance_round_trip() {
    let router = create_router_for_test();

    let (status, body) = send(router.clone(), "GET", "/balances/emp_009", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BALANCE_NOT_FOUND");

    set_balance(router.clone(), "emp_009", "3.5", "7", "12").await;

    let (status, balance) = send(router, "GET", "/balances/emp_009", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(balance["casual"], "3.5");
    assert_eq!(balance["sick"], "7");
    assert_eq!(balance["earned"], "12");
}

#[tokio::test]
async fn test_shipped_holiday_calendar_loads() {
    let calendar = HolidayLoader::load("./config/holidays.yaml").expect("shipped calendar loads");
    assert!(calendar.is_holiday(chrono::NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
    assert!(calendar.len() >= 5);
}
