//! Static bearer token authentication for the admin surface.
//!
//! The public guest routes are deliberately unauthenticated; possession of
//! the link token is the guest's whole credential. Admin routes require the
//! token configured under `api.auth_token`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use domogate_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects admin requests without the configured bearer token.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(ref expected) = state.config.api.auth_token else {
        return Err(AppError::unauthorized("Admin API token is not configured").into());
    };

    let presented = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == expected => Ok(next.run(request).await),
        _ => Err(AppError::unauthorized("Invalid or missing admin token").into()),
    }
}
