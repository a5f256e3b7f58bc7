//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use domogate_core::config::AppConfig;
use domogate_service::share::{GuestAccessService, ShareLinkService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Link issuance and revocation service.
    pub share_service: Arc<ShareLinkService>,
    /// Guest validation and actuation service.
    pub guest_service: Arc<GuestAccessService>,
}
