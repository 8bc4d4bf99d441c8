//! Presence handlers

use axum::{extract::State, Json};
use worktrack_service::{HeartbeatRequest, PresenceResponse, PresenceService};

use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Record a presence heartbeat
///
/// POST /presence/heartbeat
pub async fn heartbeat(
    State(state): State<AppState>,
    Json(request): Json<HeartbeatRequest>,
) -> ApiResult<NoContent> {
    let service = PresenceService::new(state.service_context());
    service.heartbeat(request).await?;
    Ok(NoContent)
}

/// Everyone currently live
///
/// GET /presence/now
pub async fn presence_now(State(state): State<AppState>) -> ApiResult<Json<Vec<PresenceResponse>>> {
    let service = PresenceService::new(state.service_context());
    let response = service.now().await?;
    Ok(Json(response))
}
