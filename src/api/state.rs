//! Application state for the Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::models::HolidayCalendar;
use crate::workflow::LeaveWorkflow;

/// Shared application state.
///
/// Contains the workflow engine and the organization holiday calendar.
/// The calendar sits behind its own lock so administrators can maintain it
/// while submissions read a fresh snapshot per call.
#[derive(Clone)]
pub struct AppState {
    workflow: Arc<LeaveWorkflow>,
    holidays: Arc<RwLock<HolidayCalendar>>,
}

impl AppState {
    /// Creates a new application state around the given holiday calendar.
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self {
            workflow: Arc::new(LeaveWorkflow::new()),
            holidays: Arc::new(RwLock::new(holidays)),
        }
    }

    /// Returns a reference to the workflow engine.
    pub fn workflow(&self) -> &LeaveWorkflow {
        &self.workflow
    }

    /// Returns a snapshot of the current holiday calendar.
    pub fn holidays(&self) -> HolidayCalendar {
        self.holidays
            .read()
            .expect("holiday calendar lock poisoned")
            .clone()
    }

    /// Runs a closure against the mutable holiday calendar.
    pub fn with_holidays_mut<T>(&self, f: impl FnOnce(&mut HolidayCalendar) -> T) -> T {
        let mut calendar = self
            .holidays
            .write()
            .expect("holiday calendar lock poisoned");
        f(&mut calendar)
    }
}
