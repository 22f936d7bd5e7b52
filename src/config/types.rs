//! Configuration file types for the holiday calendar.

use serde::{Deserialize, Serialize};

use crate::models::Holiday;

/// The on-disk shape of a holiday calendar file.
///
/// ```yaml
/// holidays:
///   - date: 2026-01-26
///     name: Republic Day
///     type: public
///   - date: 2026-03-04
///     name: Holi
///     type: festival
///     description: Festival of colors
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayFile {
    /// The declared holidays, in any order.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}
