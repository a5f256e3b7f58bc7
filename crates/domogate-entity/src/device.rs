//! Device entity model.

use serde::{Deserialize, Serialize};

use domogate_core::types::DeviceId;

/// Kind of access-control device exposed by the intercom provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// Building entrance door.
    EntranceDoor,
    /// Vehicle barrier.
    Barrier,
    /// Gate.
    Gate,
    /// Wicket gate.
    Wicket,
    /// Unrecognized device type code from the provider.
    Other,
}

impl DeviceKind {
    /// Map the provider's numeric device type code.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::EntranceDoor,
            2 => Self::Barrier,
            3 => Self::Gate,
            4 => Self::Wicket,
            _ => Self::Other,
        }
    }

    /// Human-readable name shown to guests.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EntranceDoor => "Entrance door",
            Self::Barrier => "Barrier",
            Self::Gate => "Gate",
            Self::Wicket => "Wicket",
            Self::Other => "Lock",
        }
    }
}

/// A controllable lock known to the provider account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Local entity id (`lock.<adapter_id>_<relay>`).
    pub id: DeviceId,
    /// Provider-side adapter id used for actuation calls.
    pub adapter_id: String,
    /// Relay number on the adapter.
    pub relay: i64,
    /// Device kind.
    pub kind: DeviceKind,
}

impl Device {
    /// Build a device from its provider key record.
    pub fn from_key(adapter_id: impl Into<String>, relay: i64, type_code: i64) -> Self {
        let adapter_id = adapter_id.into();
        Self {
            id: DeviceId::new(format!("lock.{adapter_id}_{relay}")),
            adapter_id,
            relay,
            kind: DeviceKind::from_code(type_code),
        }
    }

    /// Display name shown to guests.
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}
