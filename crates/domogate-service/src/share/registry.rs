//! In-memory registry of active guest links.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use domogate_core::error::AppError;
use domogate_core::types::LinkToken;
use domogate_entity::ShareLink;

/// A registered link together with the handle that cancels its expiry timer.
///
/// The handle is owned by the registry entry for the link's whole lifetime;
/// whoever removes the entry is responsible for cancelling it.
#[derive(Debug, Clone)]
pub struct LinkEntry {
    /// The link record.
    pub link: ShareLink,
    /// Cancels the scheduled expiry task. Safe to cancel more than once.
    pub expiry: CancellationToken,
}

/// Task-safe store of active links, keyed by token.
///
/// This is the only shared mutable state in the guest-access core. It is
/// mutated by the issuer, the revocation path, and the expiry callback;
/// the guest request path only reads. Links do not persist across process
/// restarts — a restart invalidates every outstanding link.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    /// Active links by token.
    links: Arc<Mutex<HashMap<LinkToken, LinkEntry>>>,
}

impl LinkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link with its expiry handle.
    ///
    /// Fails with a conflict if the token is already present. Random
    /// generation makes this unreachable in practice, but the registry
    /// stays defensive rather than silently replacing a live capability.
    pub async fn put(&self, link: ShareLink, expiry: CancellationToken) -> Result<(), AppError> {
        let mut links = self.links.lock().await;
        if links.contains_key(&link.token) {
            return Err(AppError::conflict(format!(
                "Duplicate link token: {}",
                link.token
            )));
        }
        links.insert(link.token.clone(), LinkEntry { link, expiry });
        Ok(())
    }

    /// Returns the link for a token, or `None` if it was never registered
    /// or has already been removed.
    pub async fn get(&self, token: &LinkToken) -> Option<ShareLink> {
        let links = self.links.lock().await;
        links.get(token).map(|entry| entry.link.clone())
    }

    /// Removes a link, returning the entry if one was present.
    ///
    /// Idempotent: removing an absent token is a no-op.
    pub async fn remove(&self, token: &LinkToken) -> Option<LinkEntry> {
        let mut links = self.links.lock().await;
        links.remove(token)
    }

    /// Snapshot of all currently active links.
    pub async fn list_active(&self) -> Vec<ShareLink> {
        let links = self.links.lock().await;
        links.values().map(|entry| entry.link.clone()).collect()
    }

    /// Snapshot of all currently active tokens, for bulk revocation.
    pub async fn tokens(&self) -> Vec<LinkToken> {
        let links = self.links.lock().await;
        links.keys().cloned().collect()
    }

    /// Number of active links.
    pub async fn len(&self) -> usize {
        let links = self.links.lock().await;
        links.len()
    }

    /// Whether the registry holds no links.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use domogate_core::error::ErrorKind;
    use domogate_core::types::DeviceId;

    fn sample_link(token: &str) -> ShareLink {
        ShareLink::new(
            LinkToken::new(token),
            DeviceId::new("lock.front_door"),
            1.0,
        )
    }

    #[tokio::test]
    async fn put_get_remove_roundtrip() {
        let registry = LinkRegistry::new();
        let token = LinkToken::new("aaaa");

        registry
            .put(sample_link("aaaa"), CancellationToken::new())
            .await
            .expect("put");

        let found = registry.get(&token).await.expect("link present");
        assert_eq!(found.device_id.as_str(), "lock.front_door");

        assert!(registry.remove(&token).await.is_some());
        assert!(registry.get(&token).await.is_none());
        // Second removal is a no-op
        assert!(registry.remove(&token).await.is_none());
    }

    #[tokio::test]
    async fn duplicate_put_is_a_conflict() {
        let registry = LinkRegistry::new();
        registry
            .put(sample_link("aaaa"), CancellationToken::new())
            .await
            .expect("first put");

        let err = registry
            .put(sample_link("aaaa"), CancellationToken::new())
            .await
            .expect_err("duplicate must fail");
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn list_active_snapshots_all_entries() {
        let registry = LinkRegistry::new();
        assert!(registry.is_empty().await);

        for token in ["aaaa", "bbbb", "cccc"] {
            registry
                .put(sample_link(token), CancellationToken::new())
                .await
                .expect("put");
        }

        assert_eq!(registry.list_active().await.len(), 3);
        assert_eq!(registry.tokens().await.len(), 3);
    }
}
