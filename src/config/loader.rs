//! Holiday calendar loading functionality.
//!
//! This module provides the [`HolidayLoader`] type for reading the
//! organization's holiday calendar from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{LeaveError, LeaveResult};
use crate::models::HolidayCalendar;

use super::types::HolidayFile;

/// Loads the organization holiday calendar from disk.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::HolidayLoader;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayLoader::load("./config/holidays.yaml").unwrap();
/// let republic_day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
/// assert!(calendar.is_holiday(republic_day));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HolidayLoader;

impl HolidayLoader {
    /// Loads a holiday calendar from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`LeaveError::ConfigNotFound`] if the file does not exist.
    /// - [`LeaveError::ConfigParseError`] if the file is not valid YAML of
    ///   the expected shape.
    /// - [`LeaveError::DuplicateHoliday`] if two entries share a calendar
    ///   day.
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<HolidayCalendar> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: HolidayFile =
            serde_yaml::from_str(&content).map_err(|e| LeaveError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        HolidayCalendar::from_holidays(file.holidays)
    }
}
