//! The device actuation seam.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::DeviceId;

/// Narrow interface to whatever can actually open the door.
///
/// The guest-access core depends only on this trait, not on the provider
/// client, so it can be exercised in tests with a recording mock. Both
/// methods are suspension points and may take arbitrarily long; callers
/// must await them without blocking other guest requests.
#[async_trait]
pub trait DeviceActuator: Send + Sync {
    /// Invoke the unlock action on a single device, waiting for completion.
    async fn unlock(&self, device: &DeviceId) -> AppResult<()>;

    /// Resolve a device's human-readable display name.
    ///
    /// Returns `None` when the device is no longer known (e.g. removed from
    /// the provider account since the link was issued).
    async fn resolve_name(&self, device: &DeviceId) -> AppResult<Option<String>>;
}
