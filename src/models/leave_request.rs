//! Leave request model and related types.
//!
//! This module defines the [`LeaveRequest`] struct together with the
//! [`LeaveType`], [`Session`] and [`LeaveStatus`] enums that describe a
//! request through its lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Casual leave, drawn from the casual balance.
    Casual,
    /// Sick leave, drawn from the sick balance.
    Sick,
    /// Earned leave, drawn from the earned balance.
    Earned,
    /// Loss-of-pay leave; unlimited but unpaid, never drawn from a balance.
    LossOfPay,
}

impl LeaveType {
    /// Returns true if this leave type consumes a capped balance.
    ///
    /// Loss-of-pay leave is unbounded and unpaid; it neither requires a
    /// balance check at submission nor a deduction on approval.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::LeaveType;
    ///
    /// assert!(LeaveType::Casual.draws_from_balance());
    /// assert!(!LeaveType::LossOfPay.draws_from_balance());
    /// ```
    pub fn draws_from_balance(&self) -> bool {
        !matches!(self, LeaveType::LossOfPay)
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Casual => write!(f, "casual"),
            LeaveType::Sick => write!(f, "sick"),
            LeaveType::Earned => write!(f, "earned"),
            LeaveType::LossOfPay => write!(f, "loss_of_pay"),
        }
    }
}

/// Which part of the day a leave request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    /// The whole working day.
    FullDay,
    /// The morning half of a single working day.
    HalfMorning,
    /// The afternoon half of a single working day.
    HalfAfternoon,
}

impl Session {
    /// Returns true for the morning and afternoon half sessions.
    pub fn is_half_day(&self) -> bool {
        !matches!(self, Session::FullDay)
    }
}

/// The lifecycle state of a leave request.
///
/// A request is created Pending and transitions exactly once to Approved
/// or Rejected. Both terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a reviewer decision.
    Pending,
    /// Approved; the balance deduction has been applied.
    Approved,
    /// Rejected with a mandatory reason.
    Rejected,
}

impl LeaveStatus {
    /// Returns true once the request has left Pending.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Represents a leave request through its lifecycle.
///
/// Invariants maintained by the workflow that creates and decides requests:
/// `to_date >= from_date`, `total_days > 0` (a request covering zero working
/// days is never persisted), `rejection_reason` is present if and only if the
/// status is Rejected, and a terminal status is never changed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee requesting leave.
    pub requester: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First calendar day of the requested range (inclusive).
    pub from_date: NaiveDate,
    /// Last calendar day of the requested range (inclusive).
    pub to_date: NaiveDate,
    /// Whether the request covers full days or one half of a single day.
    pub session: Session,
    /// Chargeable working days the request consumes (supports .5 increments).
    pub total_days: Decimal,
    /// The lifecycle state of the request.
    pub status: LeaveStatus,
    /// Reviewer-supplied reason; present exactly when the status is Rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// The reviewer who decided the request, once decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    /// When the request was submitted.
    pub applied_at: DateTime<Utc>,
}
