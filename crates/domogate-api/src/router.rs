//! Route definitions for the DomoGate HTTP surface.
//!
//! Admin routes live under `/api` behind the static bearer token; the
//! guest surface is a single public route pattern under the configured
//! share prefix. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(admin_link_routes(&state))
        .route("/health", get(handlers::health::health));

    let guest_path = format!("/{}/{{token}}", state.config.share.path_prefix);
    let guest_routes = Router::new().route(
        &guest_path,
        get(handlers::guest::confirmation).post(handlers::guest::actuate),
    );

    Router::new()
        .nest("/api", api_routes)
        .merge(guest_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Link issuance, listing, and revocation (admin token required).
fn admin_link_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/links", post(handlers::link::create_link))
        .route("/links", get(handlers::link::list_links))
        .route("/links", delete(handlers::link::revoke_all_links))
        .route("/links/{token}", delete(handlers::link::revoke_link))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ))
}
