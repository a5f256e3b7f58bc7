//! HTTP client for the intercom provider API.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use domogate_core::config::provider::ProviderConfig;
use domogate_core::error::AppError;

/// Response of the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Next refresh token.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// One subscriber key (lock) as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderKey {
    /// Adapter identifier used for actuation.
    pub adapter_id: String,
    /// Relay number on the adapter.
    pub relay: i64,
    /// Numeric device type code.
    #[serde(rename = "type")]
    pub type_code: i64,
}

/// Thin typed wrapper over the provider REST endpoints.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Provider connection settings.
    config: ProviderConfig,
}

impl ProviderClient {
    /// Creates a client with the configured request timeout.
    pub fn new(config: ProviderConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Exchanges a refresh token for a fresh token pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, AppError> {
        let url = format!("{}/authserver-service/oauth/token", self.config.base_url);
        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.config.client_id.as_str()),
            ("refresh_token", refresh_token),
        ];

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Token refresh request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::upstream(format!(
                "Token refresh failed: HTTP {}",
                response.status()
            )));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AppError::upstream(format!("Malformed token response: {e}")))?;

        debug!("Provider token refreshed");
        Ok(token)
    }

    /// Lists the subscriber's keys (controllable locks).
    pub async fn fetch_keys(&self, access_token: &str) -> Result<Vec<ProviderKey>, AppError> {
        let url = format!(
            "{}/abonents-service/api/v2/abonents/keys",
            self.config.base_url
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Key list request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::upstream(format!(
                "Key list failed: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Vec<ProviderKey>>()
            .await
            .map_err(|e| AppError::upstream(format!("Malformed key list response: {e}")))
    }

    /// Activates a key (opens the lock) on the given adapter relay.
    pub async fn activate_key(
        &self,
        access_token: &str,
        adapter_id: &str,
        relay: i64,
    ) -> Result<(), AppError> {
        let url = format!(
            "{}/rdas-service/api/v1/rdas/{adapter_id}/activate_key",
            self.config.base_url
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "rele": relay }))
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Activation request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::upstream(format!(
                "Activation failed: HTTP {}",
                response.status()
            )));
        }

        debug!(adapter_id = %adapter_id, relay = relay, "Key activated");
        Ok(())
    }
}
