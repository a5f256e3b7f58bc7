//! Guest share link configuration.

use serde::{Deserialize, Serialize};

/// Settings for temporary guest unlock links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Externally reachable base URL of this server (e.g. `https://hub.example`).
    ///
    /// Guest links are worthless if the server cannot be reached from outside
    /// the local network, so link issuance fails when this is unset.
    #[serde(default)]
    pub public_url: Option<String>,
    /// Path prefix for guest links (`<public_url>/<prefix>/<token>`).
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// TTL applied when the caller does not specify one, in hours.
    #[serde(default = "default_ttl_hours")]
    pub default_ttl_hours: f64,
    /// Smallest accepted TTL, in hours.
    #[serde(default = "default_min_ttl_hours")]
    pub min_ttl_hours: f64,
    /// Largest accepted TTL, in hours.
    #[serde(default = "default_max_ttl_hours")]
    pub max_ttl_hours: f64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            public_url: None,
            path_prefix: default_path_prefix(),
            default_ttl_hours: default_ttl_hours(),
            min_ttl_hours: default_min_ttl_hours(),
            max_ttl_hours: default_max_ttl_hours(),
        }
    }
}

fn default_path_prefix() -> String {
    "s".to_string()
}

fn default_ttl_hours() -> f64 {
    12.0
}

fn default_min_ttl_hours() -> f64 {
    0.5
}

fn default_max_ttl_hours() -> f64 {
    168.0
}
