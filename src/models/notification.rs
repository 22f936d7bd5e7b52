//! Notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message delivered to an employee as a side effect of a leave decision.
///
/// The workflow engine creates notifications when a request is approved or
/// rejected; reading and clearing them is left to the surrounding API layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,
    /// The employee the notification is addressed to.
    pub recipient: String,
    /// Human-readable outcome message.
    pub message: String,
    /// Whether the recipient has read the notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}
