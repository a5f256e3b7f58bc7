//! Newtype wrapper for device identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single controllable device (lock).
///
/// Using a distinct type prevents accidentally passing a link token where a
/// device id is expected. The value is the provider-facing entity id, e.g.
/// `lock.front_door` or `lock.<adapter_id>_<relay>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Create a device id from its string form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
