//! Leave request workflow for the Leave Engine.
//!
//! This module contains the state machine governing a leave request's
//! lifecycle: submission with working-day calculation and balance checking,
//! and the exactly-once approval or rejection with balance deduction and
//! notification side effects.

mod engine;

pub use engine::{LeaveDecision, LeaveWorkflow};
