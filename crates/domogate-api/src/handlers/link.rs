//! Admin guest-link handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use domogate_core::error::AppError;
use domogate_core::types::{DeviceId, LinkToken};

use crate::dto::request::CreateLinkRequest;
use crate::dto::response::LinkSummary;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/links
pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<CreateLinkRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state
        .share_service
        .issue(DeviceId::new(req.device_id), req.ttl_hours)
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": issued })))
}

/// GET /api/links
pub async fn list_links(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let links: Vec<LinkSummary> = state
        .share_service
        .list_active()
        .await
        .into_iter()
        .map(LinkSummary::from)
        .collect();

    Ok(Json(serde_json::json!({ "success": true, "data": links })))
}

/// DELETE /api/links/{token}
pub async fn revoke_link(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let revoked = state.share_service.revoke(&LinkToken::new(token)).await;

    Ok(Json(
        serde_json::json!({ "success": true, "data": { "revoked": revoked } }),
    ))
}

/// DELETE /api/links
pub async fn revoke_all_links(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let revoked = state.share_service.revoke_all().await;

    Ok(Json(
        serde_json::json!({ "success": true, "data": { "revoked": revoked } }),
    ))
}
