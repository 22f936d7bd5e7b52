//! Working-day calculation logic.
//!
//! This module determines how many chargeable leave days a date range
//! consumes. A calendar day is chargeable unless it is a Sunday or a
//! declared organization holiday; Sundays are the only excluded weekday.
//! A request spanning exactly one chargeable day with a half session is
//! charged half a day.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::error::{LeaveError, LeaveResult};
use crate::models::{HolidayCalendar, Session};

/// Half of one chargeable day.
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Checks whether a calendar day is chargeable against a leave balance.
///
/// A day is chargeable unless it is a Sunday or a declared holiday in the
/// supplied calendar. Matching against the calendar is by calendar-day
/// equality; no time-of-day is involved.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_chargeable;
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
///
/// // 2026-01-24 is a Saturday
/// assert!(is_chargeable(NaiveDate::from_ymd_opt(2026, 1, 24).unwrap(), &calendar));
/// // 2026-01-25 is a Sunday
/// assert!(!is_chargeable(NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(), &calendar));
/// ```
pub fn is_chargeable(date: NaiveDate, holidays: &HolidayCalendar) -> bool {
    date.weekday() != Weekday::Sun && !holidays.is_holiday(date)
}

/// Calculates the chargeable leave days for an inclusive date range.
///
/// Enumerates every calendar day in `[from_date, to_date]` and counts the
/// days that are neither Sundays nor declared holidays. If the range covers
/// exactly one chargeable day and the session is a half session, the result
/// is `0.5`. A multi-day range with a half session is NOT prorated and
/// returns the full integer count.
///
/// The result is always `0.5` or a non-negative integer, depends only on
/// the inputs, and performs no I/O.
///
/// # Errors
///
/// Returns [`LeaveError::InvalidRange`] when `to_date < from_date`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::chargeable_days;
/// use leave_engine::models::{HolidayCalendar, Session};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calendar = HolidayCalendar::new();
///
/// // 2026-01-27 is a Tuesday
/// let day = NaiveDate::from_ymd_opt(2026, 1, 27).unwrap();
/// assert_eq!(
///     chargeable_days(day, day, Session::FullDay, &calendar).unwrap(),
///     Decimal::from(1)
/// );
/// assert_eq!(
///     chargeable_days(day, day, Session::HalfMorning, &calendar).unwrap(),
///     Decimal::new(5, 1)
/// );
/// ```
pub fn chargeable_days(
    from_date: NaiveDate,
    to_date: NaiveDate,
    session: Session,
    holidays: &HolidayCalendar,
) -> LeaveResult<Decimal> {
    if to_date < from_date {
        return Err(LeaveError::InvalidRange { from_date, to_date });
    }

    let working_days = from_date
        .iter_days()
        .take_while(|day| *day <= to_date)
        .filter(|day| is_chargeable(*day, holidays))
        .count();

    // The half-day rule only reduces a request that spans exactly one
    // chargeable day; multi-day half-session requests are charged in full.
    if working_days == 1 && session.is_half_day() {
        return Ok(HALF_DAY);
    }

    Ok(Decimal::from(working_days as u64))
}
