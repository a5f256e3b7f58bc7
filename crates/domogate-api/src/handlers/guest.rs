//! Public guest handlers — the unauthenticated share-link surface.
//!
//! `GET` renders the confirmation page; `POST` performs the unlock. Both
//! re-validate the token against the registry, so revocation or expiry
//! between page load and confirmation still blocks the unlock.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use domogate_core::error::{AppError, ErrorKind};
use domogate_core::types::LinkToken;

use crate::error::status_for;
use crate::pages;
use crate::state::AppState;

/// GET /{prefix}/{token}
pub async fn confirmation(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Response {
    let token = LinkToken::new(token);

    match state.guest_service.confirmation(&token).await {
        Ok(page) => Html(pages::confirmation_page(
            &page.display_name,
            page.remaining_hours,
            page.remaining_minutes,
        ))
        .into_response(),
        Err(err) => error_response_html(&err),
    }
}

/// POST /{prefix}/{token}
pub async fn actuate(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let token = LinkToken::new(token);

    match state.guest_service.actuate(&token).await {
        Ok(receipt) => Json(serde_json::json!({
            "status": "ok",
            "title": format!("{} is open", receipt.display_name),
            "message": format!("{} opened successfully.", receipt.display_name),
        }))
        .into_response(),
        Err(err) => error_response_json(&err),
    }
}

/// HTML error page for the first (GET) step.
fn error_response_html(err: &AppError) -> Response {
    let (status, _) = status_for(err.kind);
    let (title, message) = guest_error_text(err);
    (status, Html(pages::error_page(title, &message))).into_response()
}

/// JSON error body for the confirmation (POST) step; the page's script
/// renders `message` next to the button.
fn error_response_json(err: &AppError) -> Response {
    let (status, _) = status_for(err.kind);
    let (title, message) = guest_error_text(err);
    (
        status,
        Json(serde_json::json!({
            "status": "error",
            "title": title,
            "message": message,
        })),
    )
        .into_response()
}

/// Guest-safe error text. Anything unexpected collapses to a generic
/// message; internals never reach the response body.
fn guest_error_text(err: &AppError) -> (&'static str, String) {
    match err.kind {
        ErrorKind::Gone => (
            "Link invalid",
            "The link has expired or was revoked.".to_string(),
        ),
        ErrorKind::NotFound => (
            "Error",
            "Lock not found. The integration may have been reconfigured.".to_string(),
        ),
        ErrorKind::Upstream => (
            "Error",
            "Could not open the door. Please try again.".to_string(),
        ),
        _ => ("Error", "Something went wrong. Please try again.".to_string()),
    }
}
