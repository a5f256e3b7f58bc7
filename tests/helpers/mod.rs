//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tokio::sync::broadcast;
use tower::ServiceExt;

use domogate_api::router::build_router;
use domogate_api::state::AppState;
use domogate_core::config::AppConfig;
use domogate_core::config::provider::ProviderConfig;
use domogate_core::error::AppError;
use domogate_core::traits::DeviceActuator;
use domogate_core::types::DeviceId;
use domogate_service::share::{GuestAccessService, LinkRegistry, ShareLinkService};

/// Admin token wired into every test config.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Public base URL wired into every test config (unless withheld).
pub const PUBLIC_URL: &str = "https://hub.example";

/// In-memory actuator standing in for the intercom cloud.
///
/// Records every unlock and can be switched into a failing mode to
/// exercise the retry path.
pub struct MockActuator {
    names: HashMap<String, String>,
    unlocks: AtomicUsize,
    fail_unlock: AtomicBool,
}

impl MockActuator {
    pub fn new() -> Self {
        let mut names = HashMap::new();
        names.insert(
            "lock.front_door".to_string(),
            "Entrance door".to_string(),
        );
        names.insert("lock.garage".to_string(), "Barrier".to_string());
        Self {
            names,
            unlocks: AtomicUsize::new(0),
            fail_unlock: AtomicBool::new(false),
        }
    }

    /// How many unlock calls actually reached the device.
    pub fn unlock_count(&self) -> usize {
        self.unlocks.load(Ordering::SeqCst)
    }

    /// Make subsequent unlock calls fail with an upstream error.
    pub fn set_fail_unlock(&self, fail: bool) {
        self.fail_unlock.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DeviceActuator for MockActuator {
    async fn unlock(&self, device: &DeviceId) -> Result<(), AppError> {
        if !self.names.contains_key(device.as_str()) {
            return Err(AppError::not_found(format!(
                "Unknown device {device}"
            )));
        }
        if self.fail_unlock.load(Ordering::SeqCst) {
            return Err(AppError::upstream("Relay activation failed"));
        }
        self.unlocks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn resolve_name(&self, device: &DeviceId) -> Result<Option<String>, AppError> {
        Ok(self.names.get(device.as_str()).cloned())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Link issuance service, for direct state assertions
    pub share_service: Arc<ShareLinkService>,
    /// The mock side of the actuation seam
    pub actuator: Arc<MockActuator>,
}

impl TestApp {
    /// Create a new test application with a public URL configured.
    pub fn new() -> Self {
        Self::with_public_url(Some(PUBLIC_URL))
    }

    /// Create a test application without a public URL, so that link
    /// issuance hits the precondition failure.
    pub fn without_public_url() -> Self {
        Self::with_public_url(None)
    }

    fn with_public_url(public_url: Option<&str>) -> Self {
        let mut config = AppConfig {
            server: Default::default(),
            share: Default::default(),
            provider: ProviderConfig {
                base_url: "https://provider.invalid".to_string(),
                client_id: "abonent".to_string(),
                refresh_token: "test-refresh".to_string(),
                request_timeout_seconds: 1,
            },
            api: Default::default(),
            logging: Default::default(),
        };
        config.share.public_url = public_url.map(str::to_string);
        config.api.auth_token = Some(ADMIN_TOKEN.to_string());

        let (events, _) = broadcast::channel(64);
        let registry = Arc::new(LinkRegistry::new());
        let actuator = Arc::new(MockActuator::new());

        let share_service = Arc::new(ShareLinkService::new(
            Arc::clone(&registry),
            config.share.clone(),
            events.clone(),
        ));
        let guest_service = Arc::new(GuestAccessService::new(
            Arc::clone(&registry),
            Arc::clone(&actuator) as Arc<dyn DeviceActuator>,
            events,
        ));

        let state = AppState {
            config: Arc::new(config),
            share_service: Arc::clone(&share_service),
            guest_service,
        };

        Self {
            router: build_router(state),
            share_service,
            actuator,
        }
    }

    /// Issue a link through the admin API and return its guest path.
    pub async fn issue_link(&self, device_id: &str, ttl_hours: f64) -> String {
        let response = self
            .request(
                "POST",
                "/api/links",
                Some(serde_json::json!({
                    "device_id": device_id,
                    "ttl_hours": ttl_hours,
                })),
                Some(ADMIN_TOKEN),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Link issuance failed: {:?}",
            response.body
        );

        let url = response.body["data"]["url"]
            .as_str()
            .expect("No url in issue response");
        url.strip_prefix(PUBLIC_URL)
            .expect("Issued URL not under public base")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null for HTML responses)
    pub body: Value,
    /// Raw body text, for asserting on rendered pages
    pub text: String,
}
