//! Directory of devices known to the provider account.

use std::collections::HashMap;

use domogate_core::types::DeviceId;
use domogate_entity::Device;

use crate::client::ProviderKey;

/// Maps local device ids to provider devices.
///
/// Built once at startup from the subscriber key list. A device missing
/// from the directory (e.g. removed from the account since a link was
/// issued) resolves to `None`, which the guest path turns into a 404.
#[derive(Debug, Clone, Default)]
pub struct DeviceDirectory {
    /// Devices by local entity id.
    devices: HashMap<DeviceId, Device>,
}

impl DeviceDirectory {
    /// Builds the directory from the provider key list.
    pub fn from_keys(keys: &[ProviderKey]) -> Self {
        let devices = keys
            .iter()
            .map(|key| {
                let device = Device::from_key(key.adapter_id.clone(), key.relay, key.type_code);
                (device.id.clone(), device)
            })
            .collect();
        Self { devices }
    }

    /// Looks up a device by id.
    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.get(id)
    }

    /// All known devices.
    pub fn all(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    /// Number of known devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the directory holds no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
