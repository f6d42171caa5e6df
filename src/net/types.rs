//! REST DTOs for the dashboard API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's task/channel schemas field-for-field
//! so serde can decode responses without adapter glue; optional and
//! occasionally-absent fields default rather than fail.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A publish task as returned by `/api/v1/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task identifier (UUID string).
    pub task_id: String,
    /// Target Telegram channel (numeric id or username).
    pub channel_id: String,
    /// Post content.
    pub text: String,
    /// When to publish; ISO datetime, naive values are UTC.
    pub scheduled_time: String,
    /// Lifecycle status (`pending`, `scheduled`, `processing`,
    /// `completed`, `failed`, `cancelled`).
    pub status: String,
    /// Optional photo attachment URL.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Creation timestamp; ISO datetime, naive values are UTC.
    pub created_at: String,
    /// Last failure message, if any.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Delivery attempts so far.
    #[serde(default)]
    pub retry_count: i64,
}

/// Aggregate task counters from `/api/v1/tasks/stats`.
///
/// Every field defaults so an empty stats payload decodes to zeros, which
/// is also what the pages render while degraded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub pending: i64,
    #[serde(default)]
    pub scheduled: i64,
    #[serde(default)]
    pub processing: i64,
    #[serde(default)]
    pub completed: i64,
    #[serde(default)]
    pub failed: i64,
    #[serde(default)]
    pub cancelled: i64,
    /// Success percentage over terminal tasks.
    #[serde(default)]
    pub success_rate: f64,
}

/// A Telegram channel entry from `/api/v1/channels`.
///
/// The backend reads these from a free-form JSON file; everything beyond
/// the id is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Numeric channel id or username.
    pub channel_id: String,
    /// Human-readable channel name.
    #[serde(default)]
    pub name: Option<String>,
    /// Medical specialty key the channel publishes for.
    #[serde(default)]
    pub specialty: Option<String>,
}
