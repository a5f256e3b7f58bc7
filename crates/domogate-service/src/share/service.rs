//! Guest link issuance and revocation.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use domogate_core::config::share::ShareConfig;
use domogate_core::error::AppError;
use domogate_core::events::LinkEvent;
use domogate_core::types::{DeviceId, LinkToken};
use domogate_entity::ShareLink;

use super::registry::LinkRegistry;
use super::token::TokenGenerator;

/// The result of issuing a guest link.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssuedLink {
    /// The full externally dereferenceable URL to hand to the guest.
    pub url: String,
    /// The bearer token embedded in the URL.
    pub token: LinkToken,
    /// The device the link actuates.
    pub device_id: DeviceId,
    /// When the link stops being usable.
    pub expires_at: DateTime<Utc>,
}

/// Issues, expires, and revokes guest links.
///
/// Issuance and revocation are local, synchronous bookkeeping: the only
/// external failure mode is a missing public address, checked before any
/// state is created.
#[derive(Debug, Clone)]
pub struct ShareLinkService {
    /// Registry of active links.
    registry: Arc<LinkRegistry>,
    /// TTL bounds and public URL settings.
    config: ShareConfig,
    /// Token generator.
    tokens: TokenGenerator,
    /// Lifecycle event bus.
    events: broadcast::Sender<LinkEvent>,
}

impl ShareLinkService {
    /// Creates a new share link service.
    pub fn new(
        registry: Arc<LinkRegistry>,
        config: ShareConfig,
        events: broadcast::Sender<LinkEvent>,
    ) -> Self {
        Self {
            registry,
            config,
            tokens: TokenGenerator::new(),
            events,
        }
    }

    /// Issues a guest link for a device and returns its public URL.
    ///
    /// `ttl_hours` falls back to the configured default when unset. The
    /// caller (API layer) is expected to validate the TTL too, but the
    /// service re-checks defensively.
    pub async fn issue(
        &self,
        device_id: DeviceId,
        ttl_hours: Option<f64>,
    ) -> Result<IssuedLink, AppError> {
        let ttl_hours = ttl_hours.unwrap_or(self.config.default_ttl_hours);

        if !ttl_hours.is_finite()
            || ttl_hours < self.config.min_ttl_hours
            || ttl_hours > self.config.max_ttl_hours
        {
            return Err(AppError::validation(format!(
                "TTL must be between {} and {} hours",
                self.config.min_ttl_hours, self.config.max_ttl_hours
            )));
        }

        // Checked before any state is created: a link nobody can reach
        // from outside is worse than no link at all.
        let public_url = self.public_base_url()?;

        let token = self.tokens.generate();
        let link = ShareLink::new(token.clone(), device_id.clone(), ttl_hours);
        let expires_at = link.expires_at();
        let cancel = CancellationToken::new();

        self.registry.put(link, cancel.clone()).await?;
        self.schedule_expiry(token.clone(), ttl_hours, cancel);

        let url = format!(
            "{}/{}/{}",
            public_url.trim_end_matches('/'),
            self.config.path_prefix,
            token
        );

        info!(
            device_id = %device_id,
            ttl_hours = ttl_hours,
            token = %token,
            "Guest link issued"
        );
        let _ = self.events.send(LinkEvent::Issued {
            token: token.clone(),
            device_id: device_id.clone(),
            expires_at,
        });

        Ok(IssuedLink {
            url,
            token,
            device_id,
            expires_at,
        })
    }

    /// Revokes a link early. Returns whether a link was actually removed.
    ///
    /// Idempotent: revoking an absent token is a no-op, not an error.
    pub async fn revoke(&self, token: &LinkToken) -> bool {
        let Some(entry) = self.registry.remove(token).await else {
            return false;
        };
        entry.expiry.cancel();

        debug!(token = %token, "Guest link revoked");
        let _ = self.events.send(LinkEvent::Revoked {
            token: token.clone(),
        });
        true
    }

    /// Revokes every active link.
    ///
    /// Called on teardown so no guest capability outlives the service.
    pub async fn revoke_all(&self) -> usize {
        let tokens = self.registry.tokens().await;
        let mut revoked = 0;
        for token in tokens {
            if self.revoke(&token).await {
                revoked += 1;
            }
        }
        if revoked > 0 {
            info!(count = revoked, "All guest links revoked");
        }
        revoked
    }

    /// Snapshot of all currently active links.
    pub async fn list_active(&self) -> Vec<ShareLink> {
        self.registry.list_active().await
    }

    /// The configured externally reachable base URL.
    fn public_base_url(&self) -> Result<&str, AppError> {
        self.config
            .public_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                AppError::configuration(
                    "No public address is configured; set share.public_url to an \
                     externally reachable URL so guests can open the link",
                )
            })
    }

    /// Schedules the one-shot expiry sweep for a link.
    ///
    /// The timer races against its cancellation token; revocation cancels
    /// it, and the sweep tolerates the link already being gone.
    fn schedule_expiry(&self, token: LinkToken, ttl_hours: f64, cancel: CancellationToken) {
        let registry = Arc::clone(&self.registry);
        let events = self.events.clone();
        let delay = Duration::from_secs_f64(ttl_hours * 3600.0);

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if registry.remove(&token).await.is_some() {
                        info!(token = %token, "Guest link expired");
                        let _ = events.send(LinkEvent::Expired { token });
                    }
                }
            }
        });
    }
}
