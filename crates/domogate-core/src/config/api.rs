//! Admin API configuration.

use serde::{Deserialize, Serialize};

/// Settings for the authenticated admin surface.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Static bearer token required on `/api/links` routes.
    ///
    /// When unset, admin routes reject every request. The public guest
    /// surface is never gated by this token.
    #[serde(default)]
    pub auth_token: Option<String>,
}
