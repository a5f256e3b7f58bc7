//! Upstream intercom provider configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the intercom cloud API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth client identifier.
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Long-lived refresh token obtained during onboarding.
    pub refresh_token: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://rdba.rosdomofon.com".to_string()
}

fn default_client_id() -> String {
    "abonent".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
