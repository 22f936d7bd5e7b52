//! Calculation logic for the Leave Engine.
//!
//! This module contains the working-day calculator that turns a leave date
//! range into the number of chargeable days, excluding Sundays and declared
//! organization holidays and applying the single-day half-session rule.

mod working_days;

pub use working_days::{chargeable_days, is_chargeable, HALF_DAY};
