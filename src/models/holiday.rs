//! Holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types that
//! define the set of organization holidays consulted by the working-day
//! calculator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LeaveError, LeaveResult};

/// Classifies an organization holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A statutory public holiday.
    Public,
    /// An organization-observed festival holiday.
    Festival,
}

/// Represents a declared organization holiday.
///
/// A holiday occupies exactly one calendar day; matching against leave
/// ranges is by calendar-day equality, never by timestamp.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Holiday, HolidayType};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
///     holiday_type: HolidayType::Public,
///     description: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar day of the holiday (no time component).
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
    /// Whether this is a public or festival holiday.
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The set of organization holidays, keyed by calendar day.
///
/// The calendar enforces the invariant that at most one holiday is declared
/// per calendar day. It is maintained by an administrator and consulted
/// read-only by the working-day calculator through [`HolidayCalendar::is_holiday`].
///
/// # Example
///
/// ```
/// use leave_engine::models::{Holiday, HolidayCalendar, HolidayType};
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
/// calendar.add(Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
///     holiday_type: HolidayType::Public,
///     description: None,
/// }).unwrap();
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Creates an empty holiday calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from a list of holidays.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::DuplicateHoliday`] if two holidays share a
    /// calendar day.
    pub fn from_holidays(holidays: Vec<Holiday>) -> LeaveResult<Self> {
        let mut calendar = Self::new();
        for holiday in holidays {
            calendar.add(holiday)?;
        }
        Ok(calendar)
    }

    /// Declares a holiday.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::DuplicateHoliday`] if a holiday is already
    /// declared on the same calendar day.
    pub fn add(&mut self, holiday: Holiday) -> LeaveResult<()> {
        if self.holidays.contains_key(&holiday.date) {
            return Err(LeaveError::DuplicateHoliday { date: holiday.date });
        }
        self.holidays.insert(holiday.date, holiday);
        Ok(())
    }

    /// Removes the holiday declared on the given day.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::HolidayNotFound`] if no holiday is declared
    /// on that day.
    pub fn remove(&mut self, date: NaiveDate) -> LeaveResult<Holiday> {
        self.holidays
            .remove(&date)
            .ok_or(LeaveError::HolidayNotFound { date })
    }

    /// Checks if a given calendar day is a declared holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday declared on the given day, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Iterates over the declared holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Returns the number of declared holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holidays are declared.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
