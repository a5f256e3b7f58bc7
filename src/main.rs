//! DomoGate Server — intercom guest-access bridge
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::{EnvFilter, fmt};

use domogate_api::state::AppState;
use domogate_core::config::AppConfig;
use domogate_core::error::AppError;
use domogate_core::events::LinkEvent;
use domogate_provider::{DeviceDirectory, ProviderActuator, ProviderClient, TokenManager};
use domogate_service::share::{GuestAccessService, LinkRegistry, ShareLinkService};

#[tokio::main]
async fn main() {
    let env = std::env::var("DOMOGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DomoGate v{}", env!("CARGO_PKG_VERSION"));

    if config.share.public_url.is_none() {
        tracing::warn!(
            "share.public_url is not set; guest link issuance will fail until it is configured"
        );
    }

    // ── Step 1: Provider client and token manager ────────────────
    let client = ProviderClient::new(config.provider.clone())?;
    let tokens = Arc::new(TokenManager::new(config.provider.refresh_token.clone()));

    // ── Step 2: Device directory ─────────────────────────────────
    tracing::info!("Fetching device list from provider...");
    let access_token = tokens.access_token(&client).await?;
    let keys = client.fetch_keys(&access_token).await?;
    let directory = DeviceDirectory::from_keys(&keys);
    tracing::info!(devices = directory.len(), "Device directory ready");

    let actuator = Arc::new(ProviderActuator::new(client, tokens, directory));

    // ── Step 3: Guest link services ──────────────────────────────
    let (events_tx, _) = broadcast::channel::<LinkEvent>(64);
    spawn_event_logger(events_tx.subscribe());

    let registry = Arc::new(LinkRegistry::new());
    let share_service = Arc::new(ShareLinkService::new(
        Arc::clone(&registry),
        config.share.clone(),
        events_tx.clone(),
    ));
    let guest_service = Arc::new(GuestAccessService::new(
        Arc::clone(&registry),
        actuator,
        events_tx,
    ));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        share_service: Arc::clone(&share_service),
        guest_service,
    };

    let app = domogate_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("DomoGate server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 5: Teardown ─────────────────────────────────────────
    // No guest capability may survive the service: kill every
    // outstanding link before exiting.
    share_service.revoke_all().await;

    tracing::info!("DomoGate server shut down gracefully");
    Ok(())
}

/// Trace link lifecycle events on the bus.
///
/// The services already log their own actions at info level; this
/// subscriber gives a single debug stream of the full lifecycle and
/// keeps the broadcast channel open for the process lifetime.
fn spawn_event_logger(mut events: broadcast::Receiver<LinkEvent>) {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => tracing::debug!(event = %json, "Link lifecycle event"),
                    Err(e) => tracing::warn!(error = %e, "Failed to serialize link event"),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped = skipped, "Event logger lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
