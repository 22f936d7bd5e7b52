//! Holiday calendar configuration for the Leave Engine.
//!
//! This module loads the organization's declared holidays from a YAML file
//! into a [`crate::models::HolidayCalendar`].
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::HolidayLoader;
//!
//! let calendar = HolidayLoader::load("./config/holidays.yaml").unwrap();
//! println!("Loaded {} holidays", calendar.len());
//! ```

mod loader;
mod types;

pub use loader::HolidayLoader;
pub use types::HolidayFile;
