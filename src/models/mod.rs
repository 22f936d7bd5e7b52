//! Core data models for the Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod balance;
mod holiday;
mod leave_request;
mod notification;

pub use balance::LeaveBalance;
pub use holiday::{Holiday, HolidayCalendar, HolidayType};
pub use leave_request::{LeaveRequest, LeaveStatus, LeaveType, Session};
pub use notification::Notification;
