//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request structures for the leave, holiday,
//! balance and calculation endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidayType, LeaveBalance, LeaveType, Session};
use crate::workflow::LeaveDecision;

/// Request body for the `POST /calculate` endpoint.
///
/// When `holidays` is present the calculation runs against exactly that
/// list; otherwise the organization calendar is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// First calendar day of the range (inclusive).
    pub from_date: NaiveDate,
    /// Last calendar day of the range (inclusive).
    pub to_date: NaiveDate,
    /// Whether the range covers full days or one half of a single day.
    #[serde(default = "default_session")]
    pub session: Session,
    /// Optional inline holiday list overriding the organization calendar.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayRequest>>,
}

fn default_session() -> Session {
    Session::FullDay
}

/// Request body for the `POST /leave-requests` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// The employee requesting leave.
    pub requester: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First calendar day of the requested range (inclusive).
    pub from_date: NaiveDate,
    /// Last calendar day of the requested range (inclusive).
    pub to_date: NaiveDate,
    /// Whether the request covers full days or one half of a single day.
    #[serde(default = "default_session")]
    pub session: Session,
}

/// Request body for the `POST /leave-requests/:id/decision` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideRequest {
    /// The reviewer's verdict.
    pub decision: LeaveDecision,
    /// Mandatory when the decision is `reject`.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    /// The reviewer deciding the request.
    pub reviewer: String,
}

/// Holiday information in a calculation request or a `POST /holidays` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The calendar day of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Whether this is a public or festival holiday.
    #[serde(rename = "type", default = "default_holiday_type")]
    pub holiday_type: HolidayType,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_holiday_type() -> HolidayType {
    HolidayType::Public
}

/// Request body for the `PUT /balances/:employee_id` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Casual leave days remaining.
    pub casual: Decimal,
    /// Sick leave days remaining.
    pub sick: Decimal,
    /// Earned leave days remaining.
    pub earned: Decimal,
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
            holiday_type: req.holiday_type,
            description: req.description,
        }
    }
}

impl From<BalanceRequest> for LeaveBalance {
    fn from(req: BalanceRequest) -> Self {
        LeaveBalance {
            casual: req.casual,
            sick: req.sick,
            earned: req.earned,
        }
    }
}
