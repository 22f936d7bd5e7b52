//! Error types for the Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all validation and business-rule failures in the engine. Every
//! failure is a synchronous business outcome reported to the caller; the
//! engine never retries or swallows them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LeaveStatus, LeaveType};

/// The main error type for the Leave Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::LeaveError;
/// use chrono::NaiveDate;
///
/// let error = LeaveError::InvalidRange {
///     from_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2026, 1, 24).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: end date 2026-01-24 precedes start date 2026-01-26"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LeaveError {
    /// The end date of a leave range precedes its start date.
    #[error("Invalid date range: end date {to_date} precedes start date {from_date}")]
    InvalidRange {
        /// The start of the requested range.
        from_date: NaiveDate,
        /// The end of the requested range.
        to_date: NaiveDate,
    },

    /// A leave request was submitted with a start date in the past.
    #[error("Start date {from_date} is before the submission day {today}")]
    PastDateNotAllowed {
        /// The start of the requested range.
        from_date: NaiveDate,
        /// The calendar day the request was submitted.
        today: NaiveDate,
    },

    /// Every day in the requested range is a Sunday or a holiday.
    #[error("No chargeable days between {from_date} and {to_date}")]
    NoChargeableDays {
        /// The start of the requested range.
        from_date: NaiveDate,
        /// The end of the requested range.
        to_date: NaiveDate,
    },

    /// The requested days exceed the available balance for a paid leave type.
    #[error("Insufficient {leave_type} balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// The paid leave type that was requested.
        leave_type: LeaveType,
        /// The chargeable days the request would consume.
        requested: Decimal,
        /// The days remaining in the requester's balance.
        available: Decimal,
    },

    /// A decision was attempted on a request that has already left Pending.
    #[error("Leave request {request_id} was already processed (status: {status})")]
    AlreadyProcessed {
        /// The id of the request.
        request_id: Uuid,
        /// The terminal status the request already holds.
        status: LeaveStatus,
    },

    /// A rejection was attempted without a rejection reason.
    #[error("A rejection reason is required to reject leave request {request_id}")]
    MissingReason {
        /// The id of the request.
        request_id: Uuid,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {request_id}")]
    RequestNotFound {
        /// The id that was looked up.
        request_id: Uuid,
    },

    /// No leave balance record exists for the given employee.
    #[error("No leave balance found for employee '{employee_id}'")]
    BalanceNotFound {
        /// The employee whose balance was looked up.
        employee_id: String,
    },

    /// A holiday already exists on the given calendar day.
    #[error("A holiday is already declared on {date}")]
    DuplicateHoliday {
        /// The calendar day that is already occupied.
        date: NaiveDate,
    },

    /// No holiday is declared on the given calendar day.
    #[error("No holiday is declared on {date}")]
    HolidayNotFound {
        /// The calendar day that was looked up.
        date: NaiveDate,
    },

    /// Holiday calendar file was not found at the specified path.
    #[error("Holiday calendar file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Holiday calendar file could not be parsed.
    #[error("Failed to parse holiday calendar '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
