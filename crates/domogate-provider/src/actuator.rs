//! Production [`DeviceActuator`] backed by the provider API.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use domogate_core::error::AppError;
use domogate_core::traits::DeviceActuator;
use domogate_core::types::DeviceId;

use crate::client::ProviderClient;
use crate::directory::DeviceDirectory;
use crate::token::TokenManager;

/// Unlocks devices through the intercom cloud API.
pub struct ProviderActuator {
    /// Provider REST client.
    client: ProviderClient,
    /// OAuth token manager.
    tokens: Arc<TokenManager>,
    /// Device directory built at startup.
    directory: DeviceDirectory,
}

impl ProviderActuator {
    /// Creates the actuator.
    pub fn new(
        client: ProviderClient,
        tokens: Arc<TokenManager>,
        directory: DeviceDirectory,
    ) -> Self {
        Self {
            client,
            tokens,
            directory,
        }
    }
}

#[async_trait]
impl DeviceActuator for ProviderActuator {
    async fn unlock(&self, device: &DeviceId) -> Result<(), AppError> {
        let entry = self
            .directory
            .get(device)
            .ok_or_else(|| AppError::not_found(format!("Unknown device: {device}")))?;

        let access_token = self.tokens.access_token(&self.client).await?;
        self.client
            .activate_key(&access_token, &entry.adapter_id, entry.relay)
            .await?;

        info!(device_id = %device, "Device unlocked");
        Ok(())
    }

    async fn resolve_name(&self, device: &DeviceId) -> Result<Option<String>, AppError> {
        Ok(self
            .directory
            .get(device)
            .map(|entry| entry.display_name().to_string()))
    }
}
