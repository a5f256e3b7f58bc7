//! Admin API request DTOs.

use serde::Deserialize;
use validator::Validate;

/// Request to issue a new guest link.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Target device id, e.g. `lock.12345_1`.
    #[validate(length(min = 1, message = "device_id must not be empty"))]
    pub device_id: String,
    /// TTL in hours; the configured default applies when omitted.
    ///
    /// The share service re-validates against the configured bounds; this
    /// range only catches grossly malformed input early.
    #[validate(range(min = 0.001, max = 8760.0))]
    pub ttl_hours: Option<f64>,
}
