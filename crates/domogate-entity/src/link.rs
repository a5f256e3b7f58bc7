//! Guest share link entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use domogate_core::types::{DeviceId, LinkToken};

/// A time-boxed, single-device, bearer-capability link.
///
/// The link grants exactly one capability: invoking "unlock" on exactly one
/// device. It is never mutated after creation — no TTL extension, no
/// retargeting. Expiry and revocation remove it from the registry entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLink {
    /// Opaque bearer token, embedded in the public URL.
    pub token: LinkToken,
    /// The single device this link may actuate.
    pub device_id: DeviceId,
    /// When the link was issued.
    pub created_at: DateTime<Utc>,
    /// Time to live in hours (fractional allowed).
    pub ttl_hours: f64,
}

impl ShareLink {
    /// Create a link issued now.
    pub fn new(token: LinkToken, device_id: DeviceId, ttl_hours: f64) -> Self {
        Self {
            token,
            device_id,
            created_at: Utc::now(),
            ttl_hours,
        }
    }

    /// The TTL as a `chrono::Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::milliseconds((self.ttl_hours * 3_600_000.0) as i64)
    }

    /// The instant at which the link stops being usable.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.ttl()
    }

    /// Whether the link is expired at the given instant.
    ///
    /// The boundary is inclusive: a request arriving at exactly
    /// `expires_at` is rejected.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Whether the link is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Remaining validity at the given instant, clamped to zero.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at() - now).max(Duration::zero())
    }

    /// Remaining validity split into whole hours and minutes for display.
    pub fn remaining_display(&self, now: DateTime<Utc>) -> (i64, i64) {
        let remaining = self.remaining_at(now);
        (remaining.num_hours(), remaining.num_minutes() % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_with_ttl(ttl_hours: f64) -> ShareLink {
        ShareLink::new(
            LinkToken::new("0123456789abcdef0123456789abcdef"),
            DeviceId::new("lock.front_door"),
            ttl_hours,
        )
    }

    #[test]
    fn fresh_link_is_not_expired() {
        for ttl in [0.5, 1.0, 12.0, 168.0] {
            let link = link_with_ttl(ttl);
            assert!(!link.is_expired(), "ttl={ttl}");
        }
    }

    #[test]
    fn expired_exactly_at_deadline() {
        let link = link_with_ttl(1.0);
        let deadline = link.expires_at();
        assert!(!link.is_expired_at(deadline - Duration::seconds(1)));
        assert!(link.is_expired_at(deadline));
        assert!(link.is_expired_at(deadline + Duration::seconds(1)));
    }

    #[test]
    fn expires_at_is_created_at_plus_ttl() {
        let link = link_with_ttl(1.5);
        assert_eq!(
            link.expires_at() - link.created_at,
            Duration::minutes(90)
        );
    }

    #[test]
    fn remaining_display_splits_hours_and_minutes() {
        let link = link_with_ttl(1.0);
        let (hours, minutes) = link.remaining_display(link.created_at);
        assert_eq!((hours, minutes), (1, 0));

        let (hours, minutes) =
            link.remaining_display(link.created_at + Duration::minutes(30));
        assert_eq!((hours, minutes), (0, 30));

        let (hours, minutes) = link.remaining_display(link.expires_at());
        assert_eq!((hours, minutes), (0, 0));
    }

    #[test]
    fn remaining_is_clamped_after_expiry() {
        let link = link_with_ttl(0.5);
        let past_deadline = link.expires_at() + Duration::hours(2);
        assert_eq!(link.remaining_at(past_deadline), Duration::zero());
    }
}
