//! OAuth token lifecycle for the provider API.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use domogate_core::error::AppError;

use crate::client::ProviderClient;

/// Margin before expiry at which a refresh is triggered.
const EXPIRY_MARGIN: Duration = Duration::seconds(60);

/// Current token pair and its deadline.
#[derive(Debug, Clone)]
struct TokenState {
    /// Current access token, if one was ever obtained.
    access_token: Option<String>,
    /// Refresh token for the next exchange.
    refresh_token: String,
    /// When the access token stops being usable (with margin applied).
    valid_until: DateTime<Utc>,
}

/// Manages the provider OAuth token pair.
///
/// Starts from the configured long-lived refresh token and keeps a valid
/// access token available, refreshing with a safety margin. Concurrent
/// callers serialize behind the mutex so only one refresh runs at a time.
#[derive(Debug)]
pub struct TokenManager {
    /// Protected token state.
    state: Mutex<TokenState>,
}

impl TokenManager {
    /// Creates a manager seeded with the configured refresh token.
    ///
    /// The first [`access_token`](Self::access_token) call performs the
    /// initial exchange.
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(TokenState {
                access_token: None,
                refresh_token: refresh_token.into(),
                valid_until: DateTime::<Utc>::MIN_UTC,
            }),
        }
    }

    /// Returns a valid access token, refreshing it first if needed.
    pub async fn access_token(&self, client: &ProviderClient) -> Result<String, AppError> {
        let mut state = self.state.lock().await;

        if let Some(ref token) = state.access_token {
            if Utc::now() < state.valid_until {
                return Ok(token.clone());
            }
            debug!("Provider access token expired, refreshing");
        }

        let response = client.refresh_token(&state.refresh_token).await?;

        state.valid_until = Utc::now() + Duration::seconds(response.expires_in) - EXPIRY_MARGIN;
        state.refresh_token = response.refresh_token;
        state.access_token = Some(response.access_token.clone());

        Ok(response.access_token)
    }
}
