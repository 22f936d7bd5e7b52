//! Leave Engine
//!
//! This crate provides the core of an employee leave-management system:
//! calculating the chargeable working days of a leave request (excluding
//! Sundays and organization holidays, with half-day session handling) and
//! driving the leave-request lifecycle from submission through approval or
//! rejection, including balance deduction and notification side effects.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod workflow;
