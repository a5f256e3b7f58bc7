//! Admin API response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use domogate_core::types::{DeviceId, LinkToken};
use domogate_entity::ShareLink;

/// Summary of an active guest link for admin listings.
#[derive(Debug, Clone, Serialize)]
pub struct LinkSummary {
    /// The link token.
    pub token: LinkToken,
    /// The target device.
    pub device_id: DeviceId,
    /// When the link was issued.
    pub created_at: DateTime<Utc>,
    /// When the link expires.
    pub expires_at: DateTime<Utc>,
}

impl From<ShareLink> for LinkSummary {
    fn from(link: ShareLink) -> Self {
        Self {
            expires_at: link.expires_at(),
            token: link.token,
            device_id: link.device_id,
            created_at: link.created_at,
        }
    }
}
