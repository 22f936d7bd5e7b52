//! HTTP API module for the Leave Engine.
//!
//! This module provides the REST endpoints that the role-specific portals
//! call: the working-day calculator, leave submission and decisions, holiday
//! calendar maintenance, balance administration, and notification listing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceRequest, CalculateRequest, DecideRequest, HolidayRequest, SubmitRequest,
};
pub use response::{ApiError, CalculateResponse};
pub use state::AppState;
