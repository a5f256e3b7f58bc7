//! Guest access control — validates link tokens and performs the unlock.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use domogate_core::error::AppError;
use domogate_core::events::LinkEvent;
use domogate_core::traits::DeviceActuator;
use domogate_core::types::LinkToken;
use domogate_entity::ShareLink;

use super::registry::LinkRegistry;

/// What the guest confirmation page needs to render.
#[derive(Debug, Clone)]
pub struct GuestPage {
    /// Human-readable device name.
    pub display_name: String,
    /// Whole hours of remaining validity.
    pub remaining_hours: i64,
    /// Remaining minutes past the whole hours.
    pub remaining_minutes: i64,
}

/// Outcome of a successful guest unlock.
#[derive(Debug, Clone)]
pub struct UnlockReceipt {
    /// Human-readable device name, for the success message.
    pub display_name: String,
}

/// Serves anonymous guest requests against the link registry.
///
/// This service only reads the registry; expiry and revocation mutate it
/// elsewhere. Validity is re-checked on every request, so a link revoked
/// or expired between page load and confirmation is still rejected.
#[derive(Clone)]
pub struct GuestAccessService {
    /// Registry of active links (read-only from here).
    registry: Arc<LinkRegistry>,
    /// The device actuation seam.
    actuator: Arc<dyn DeviceActuator>,
    /// Lifecycle event bus.
    events: broadcast::Sender<LinkEvent>,
}

impl GuestAccessService {
    /// Creates a new guest access service.
    pub fn new(
        registry: Arc<LinkRegistry>,
        actuator: Arc<dyn DeviceActuator>,
        events: broadcast::Sender<LinkEvent>,
    ) -> Self {
        Self {
            registry,
            actuator,
            events,
        }
    }

    /// Validates a token and returns the data for the confirmation page.
    ///
    /// No side effect on the device.
    pub async fn confirmation(&self, token: &LinkToken) -> Result<GuestPage, AppError> {
        let link = self.valid_link(token).await?;
        let display_name = self.resolve_display_name(&link).await?;
        let (remaining_hours, remaining_minutes) = link.remaining_display(Utc::now());

        Ok(GuestPage {
            display_name,
            remaining_hours,
            remaining_minutes,
        })
    }

    /// Validates a token and performs the unlock.
    ///
    /// Validity is checked at invocation time, not page-load time. A
    /// downstream actuation failure leaves the link valid so the guest can
    /// retry until the TTL elapses.
    pub async fn actuate(&self, token: &LinkToken) -> Result<UnlockReceipt, AppError> {
        let link = self.valid_link(token).await?;
        let display_name = self.resolve_display_name(&link).await?;

        info!(token = %token, device_id = %link.device_id, "Guest unlock requested");

        if let Err(err) = self.actuator.unlock(&link.device_id).await {
            error!(
                device_id = %link.device_id,
                error = %err,
                "Guest unlock failed"
            );
            // Guest-safe message only; internals stay in the log.
            return Err(AppError::upstream(format!(
                "Could not open {display_name}. Please try again."
            )));
        }

        let _ = self.events.send(LinkEvent::Unlocked {
            token: token.clone(),
            device_id: link.device_id.clone(),
        });

        Ok(UnlockReceipt { display_name })
    }

    /// Looks up a token and rejects absent or expired links.
    ///
    /// An expired link may still sit in the registry for the instant before
    /// its sweep fires, so expiry is checked against the clock here too.
    async fn valid_link(&self, token: &LinkToken) -> Result<ShareLink, AppError> {
        let Some(link) = self.registry.get(token).await else {
            warn!(token = %token, "Attempt to use an unknown or revoked link");
            return Err(AppError::gone("The link has expired or was revoked"));
        };

        if link.is_expired() {
            warn!(token = %token, "Attempt to use an expired link");
            return Err(AppError::gone("The link has expired or was revoked"));
        }

        Ok(link)
    }

    /// Resolves the device's display name, failing if it no longer exists.
    async fn resolve_display_name(&self, link: &ShareLink) -> Result<String, AppError> {
        match self.actuator.resolve_name(&link.device_id).await? {
            Some(name) => Ok(name),
            None => {
                error!(device_id = %link.device_id, "Link target device not found");
                Err(AppError::not_found(
                    "Lock not found. The integration may have been reconfigured.",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio_util::sync::CancellationToken;

    use domogate_core::error::ErrorKind;
    use domogate_core::types::DeviceId;

    /// Recording actuator test double.
    struct FakeActuator {
        unlocks: AtomicUsize,
        fail_unlock: AtomicBool,
        known: bool,
    }

    impl FakeActuator {
        fn new() -> Self {
            Self {
                unlocks: AtomicUsize::new(0),
                fail_unlock: AtomicBool::new(false),
                known: true,
            }
        }

        fn unknown_device() -> Self {
            Self {
                known: false,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl DeviceActuator for FakeActuator {
        async fn unlock(&self, _device: &DeviceId) -> Result<(), AppError> {
            if self.fail_unlock.load(Ordering::SeqCst) {
                return Err(AppError::upstream("adapter offline"));
            }
            self.unlocks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn resolve_name(&self, _device: &DeviceId) -> Result<Option<String>, AppError> {
            Ok(self.known.then(|| "Entrance door".to_string()))
        }
    }

    struct Fixture {
        registry: Arc<LinkRegistry>,
        actuator: Arc<FakeActuator>,
        service: GuestAccessService,
    }

    fn fixture(actuator: FakeActuator) -> Fixture {
        let registry = Arc::new(LinkRegistry::new());
        let actuator = Arc::new(actuator);
        let (events, _) = broadcast::channel(16);
        let service = GuestAccessService::new(
            Arc::clone(&registry),
            Arc::clone(&actuator) as Arc<dyn DeviceActuator>,
            events,
        );
        Fixture {
            registry,
            actuator,
            service,
        }
    }

    async fn register_link(registry: &LinkRegistry, ttl_hours: f64) -> LinkToken {
        let token = LinkToken::new("0123456789abcdef0123456789abcdef");
        let link = ShareLink::new(token.clone(), DeviceId::new("lock.front_door"), ttl_hours);
        registry
            .put(link, CancellationToken::new())
            .await
            .expect("put");
        token
    }

    #[tokio::test]
    async fn confirmation_shows_name_and_remaining_time() {
        let f = fixture(FakeActuator::new());
        let token = register_link(&f.registry, 1.0).await;

        let page = f.service.confirmation(&token).await.expect("page");
        assert_eq!(page.display_name, "Entrance door");
        assert_eq!(page.remaining_hours, 0);
        assert!(page.remaining_minutes >= 59);
        assert_eq!(f.actuator.unlocks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn actuate_unlocks_exactly_once_per_confirmation() {
        let f = fixture(FakeActuator::new());
        let token = register_link(&f.registry, 1.0).await;

        let receipt = f.service.actuate(&token).await.expect("unlock");
        assert_eq!(receipt.display_name, "Entrance door");
        assert_eq!(f.actuator.unlocks.load(Ordering::SeqCst), 1);

        // Repeatable by design: a second confirmation unlocks again.
        f.service.actuate(&token).await.expect("unlock again");
        assert_eq!(f.actuator.unlocks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unknown_token_is_gone_without_actuation() {
        let f = fixture(FakeActuator::new());
        let token = LinkToken::new("ffffffffffffffffffffffffffffffff");

        let err = f.service.actuate(&token).await.expect_err("gone");
        assert_eq!(err.kind, ErrorKind::Gone);
        assert_eq!(f.actuator.unlocks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn expired_link_is_rejected_even_if_still_registered() {
        let f = fixture(FakeActuator::new());
        let token = LinkToken::new("0123456789abcdef0123456789abcdef");
        let link = ShareLink {
            token: token.clone(),
            device_id: DeviceId::new("lock.front_door"),
            created_at: Utc::now() - chrono::Duration::hours(2),
            ttl_hours: 1.0,
        };
        f.registry
            .put(link, CancellationToken::new())
            .await
            .expect("put");

        let err = f.service.actuate(&token).await.expect_err("expired");
        assert_eq!(err.kind, ErrorKind::Gone);
        assert_eq!(f.actuator.unlocks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_device_is_not_found() {
        let f = fixture(FakeActuator::unknown_device());
        let token = register_link(&f.registry, 1.0).await;

        let err = f.service.confirmation(&token).await.expect_err("missing");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn actuation_failure_keeps_the_link_valid() {
        let f = fixture(FakeActuator::new());
        let token = register_link(&f.registry, 1.0).await;

        f.actuator.fail_unlock.store(true, Ordering::SeqCst);
        let err = f.service.actuate(&token).await.expect_err("failure");
        assert_eq!(err.kind, ErrorKind::Upstream);
        // Generic message, no internals leaked.
        assert!(!err.message.contains("adapter offline"));

        // The guest may retry within the TTL.
        f.actuator.fail_unlock.store(false, Ordering::SeqCst);
        f.service.actuate(&token).await.expect("retry succeeds");
        assert_eq!(f.actuator.unlocks.load(Ordering::SeqCst), 1);
    }
}
