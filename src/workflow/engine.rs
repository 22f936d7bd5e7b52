//! The leave request workflow engine.
//!
//! [`LeaveWorkflow`] owns the requests, balances and notifications of the
//! organization behind a single lock. The lock is the transaction boundary:
//! the balance check during submission, and the status write plus balance
//! deduction plus notification append during a decision, each run inside one
//! critical section. Two concurrent approvals for the same requester
//! serialize on it, and two simultaneous decisions on one request cannot
//! both observe it Pending.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::chargeable_days;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{
    HolidayCalendar, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType, Notification, Session,
};

/// A reviewer's verdict on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    /// Approve the request and deduct the balance for paid leave types.
    Approve,
    /// Reject the request; a rejection reason is mandatory.
    Reject,
}

/// Everything the workflow guards with its lock.
#[derive(Debug, Default)]
struct WorkflowState {
    balances: HashMap<String, LeaveBalance>,
    requests: HashMap<Uuid, LeaveRequest>,
    notifications: Vec<Notification>,
}

/// The leave request state machine.
///
/// Requests are created Pending by [`LeaveWorkflow::submit`] and move exactly
/// once to Approved or Rejected through [`LeaveWorkflow::decide`]. Balances
/// live inside the workflow as an owned sub-resource and are never mutated
/// outside its critical sections.
///
/// # Example
///
/// ```
/// use leave_engine::models::{HolidayCalendar, LeaveBalance, LeaveType, Session};
/// use leave_engine::workflow::{LeaveDecision, LeaveWorkflow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let workflow = LeaveWorkflow::new();
/// workflow.set_balance("emp_001", LeaveBalance {
///     casual: Decimal::from(8),
///     sick: Decimal::from(10),
///     earned: Decimal::from(15),
/// });
///
/// let calendar = HolidayCalendar::new();
/// let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
/// let request = workflow.submit_as_of(
///     today,
///     "emp_001",
///     LeaveType::Casual,
///     NaiveDate::from_ymd_opt(2026, 1, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
///     Session::FullDay,
///     &calendar,
/// ).unwrap();
///
/// let decided = workflow
///     .decide(request.id, LeaveDecision::Approve, None, "lead_001")
///     .unwrap();
/// assert_eq!(decided.total_days, Decimal::from(2));
/// ```
#[derive(Debug, Default)]
pub struct LeaveWorkflow {
    state: Mutex<WorkflowState>,
}

impl LeaveWorkflow {
    /// Creates a workflow with no requests, balances or notifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a leave request, evaluating the past-date rule against the
    /// current local calendar day.
    ///
    /// See [`LeaveWorkflow::submit_as_of`] for the validation pipeline.
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        &self,
        requester: &str,
        leave_type: LeaveType,
        from_date: NaiveDate,
        to_date: NaiveDate,
        session: Session,
        holidays: &HolidayCalendar,
    ) -> LeaveResult<LeaveRequest> {
        self.submit_as_of(
            Local::now().date_naive(),
            requester,
            leave_type,
            from_date,
            to_date,
            session,
            holidays,
        )
    }

    /// Submits a leave request, evaluating the past-date rule against an
    /// explicit submission day.
    ///
    /// The validation pipeline, in order:
    ///
    /// 1. `to_date < from_date` fails with [`LeaveError::InvalidRange`].
    /// 2. `from_date < today` fails with [`LeaveError::PastDateNotAllowed`];
    ///    only the start date is measured against the submission day.
    /// 3. The working-day calculator runs; its errors propagate.
    /// 4. A result of zero fails with [`LeaveError::NoChargeableDays`] and
    ///    nothing is persisted.
    /// 5. For balance-drawing leave types the requester's balance must cover
    ///    the computed days, else [`LeaveError::InsufficientBalance`];
    ///    loss-of-pay skips the check entirely.
    ///
    /// On success a Pending request is persisted and returned. No balance is
    /// deducted at submission; deduction happens on approval.
    ///
    /// # Errors
    ///
    /// Any of the validation failures above, or
    /// [`LeaveError::BalanceNotFound`] when a balance-drawing type is
    /// requested by an employee with no balance record.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_as_of(
        &self,
        today: NaiveDate,
        requester: &str,
        leave_type: LeaveType,
        from_date: NaiveDate,
        to_date: NaiveDate,
        session: Session,
        holidays: &HolidayCalendar,
    ) -> LeaveResult<LeaveRequest> {
        if to_date < from_date {
            return Err(LeaveError::InvalidRange { from_date, to_date });
        }
        if from_date < today {
            return Err(LeaveError::PastDateNotAllowed { from_date, today });
        }

        let total_days = chargeable_days(from_date, to_date, session, holidays)?;
        if total_days == Decimal::ZERO {
            return Err(LeaveError::NoChargeableDays { from_date, to_date });
        }

        // Balance check and insertion share one critical section so a
        // concurrent submission cannot interleave between check and persist.
        let mut state = self.state.lock().expect("workflow lock poisoned");

        if leave_type.draws_from_balance() {
            let available = state
                .balances
                .get(requester)
                .ok_or_else(|| LeaveError::BalanceNotFound {
                    employee_id: requester.to_string(),
                })?
                .available(leave_type)
                .unwrap_or(Decimal::ZERO);
            if available < total_days {
                return Err(LeaveError::InsufficientBalance {
                    leave_type,
                    requested: total_days,
                    available,
                });
            }
        }

        let request = LeaveRequest {
            id: Uuid::new_v4(),
            requester: requester.to_string(),
            leave_type,
            from_date,
            to_date,
            session,
            total_days,
            status: LeaveStatus::Pending,
            rejection_reason: None,
            decided_by: None,
            applied_at: Utc::now(),
        };
        state.requests.insert(request.id, request.clone());
        Ok(request)
    }

    /// Decides a pending leave request, exactly once.
    ///
    /// The Pending guard, the status write, the balance deduction and the
    /// notification append all happen inside one critical section, so a
    /// second decision on the same request always observes the terminal
    /// status and fails.
    ///
    /// On approval of a balance-drawing leave type the requester's balance
    /// is decremented by the request's `total_days`. The decrement is not
    /// re-validated against the current balance and may drive it negative
    /// when the balance changed between submission and approval; loss-of-pay
    /// approvals leave balances untouched. Either outcome appends a
    /// [`Notification`] for the requester.
    ///
    /// # Errors
    ///
    /// - [`LeaveError::RequestNotFound`] for an unknown id.
    /// - [`LeaveError::AlreadyProcessed`] when the request is not Pending.
    /// - [`LeaveError::MissingReason`] for a rejection without a non-empty
    ///   reason.
    pub fn decide(
        &self,
        request_id: Uuid,
        decision: LeaveDecision,
        rejection_reason: Option<String>,
        reviewer: &str,
    ) -> LeaveResult<LeaveRequest> {
        let mut state = self.state.lock().expect("workflow lock poisoned");

        let request = state
            .requests
            .get(&request_id)
            .ok_or(LeaveError::RequestNotFound { request_id })?;
        if request.status != LeaveStatus::Pending {
            return Err(LeaveError::AlreadyProcessed {
                request_id,
                status: request.status,
            });
        }

        let reason = match decision {
            LeaveDecision::Approve => None,
            LeaveDecision::Reject => match rejection_reason {
                Some(reason) if !reason.trim().is_empty() => Some(reason),
                _ => return Err(LeaveError::MissingReason { request_id }),
            },
        };

        let request = state
            .requests
            .get_mut(&request_id)
            .expect("request vanished inside the critical section");
        request.status = match decision {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        };
        request.rejection_reason = reason;
        request.decided_by = Some(reviewer.to_string());
        let decided = request.clone();

        if decision == LeaveDecision::Approve && decided.leave_type.draws_from_balance() {
            state
                .balances
                .entry(decided.requester.clone())
                .or_default()
                .deduct(decided.leave_type, decided.total_days);
        }

        let message = match decision {
            LeaveDecision::Approve => format!(
                "Your {} leave request for {} day(s) from {} to {} was approved",
                decided.leave_type, decided.total_days, decided.from_date, decided.to_date
            ),
            LeaveDecision::Reject => format!(
                "Your {} leave request for {} day(s) from {} to {} was rejected: {}",
                decided.leave_type,
                decided.total_days,
                decided.from_date,
                decided.to_date,
                decided
                    .rejection_reason
                    .as_deref()
                    .unwrap_or_default()
            ),
        };
        state.notifications.push(Notification {
            id: Uuid::new_v4(),
            recipient: decided.requester.clone(),
            message,
            is_read: false,
            created_at: Utc::now(),
        });

        Ok(decided)
    }

    /// Returns the leave request with the given id, if any.
    pub fn request(&self, request_id: Uuid) -> Option<LeaveRequest> {
        let state = self.state.lock().expect("workflow lock poisoned");
        state.requests.get(&request_id).cloned()
    }

    /// Returns all leave requests submitted by an employee, oldest first.
    pub fn requests_for(&self, requester: &str) -> Vec<LeaveRequest> {
        let state = self.state.lock().expect("workflow lock poisoned");
        let mut requests: Vec<LeaveRequest> = state
            .requests
            .values()
            .filter(|r| r.requester == requester)
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.applied_at);
        requests
    }

    /// Returns the leave balance record for an employee, if one exists.
    pub fn balance(&self, employee_id: &str) -> Option<LeaveBalance> {
        let state = self.state.lock().expect("workflow lock poisoned");
        state.balances.get(employee_id).copied()
    }

    /// Creates or replaces the leave balance record for an employee.
    pub fn set_balance(&self, employee_id: &str, balance: LeaveBalance) {
        let mut state = self.state.lock().expect("workflow lock poisoned");
        state.balances.insert(employee_id.to_string(), balance);
    }

    /// Returns all notifications addressed to a recipient, oldest first.
    pub fn notifications_for(&self, recipient: &str) -> Vec<Notification> {
        let state = self.state.lock().expect("workflow lock poisoned");
        state
            .notifications
            .iter()
            .filter(|n| n.recipient == recipient)
            .cloned()
            .collect()
    }
}
