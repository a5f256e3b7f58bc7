//! Share-link lifecycle events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DeviceId, LinkToken};

/// Events related to guest link operations.
///
/// Published on a broadcast channel by the share service; the server binary
/// subscribes and surfaces them to the operator log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LinkEvent {
    /// A guest link was issued.
    Issued {
        /// The link token.
        token: LinkToken,
        /// The target device.
        device_id: DeviceId,
        /// When the link expires.
        expires_at: DateTime<Utc>,
    },
    /// A guest confirmed a link and the device was unlocked.
    Unlocked {
        /// The link token.
        token: LinkToken,
        /// The target device.
        device_id: DeviceId,
    },
    /// A link was revoked before its TTL elapsed.
    Revoked {
        /// The link token.
        token: LinkToken,
    },
    /// A link reached its TTL and was swept from the registry.
    Expired {
        /// The link token.
        token: LinkToken,
    },
}
