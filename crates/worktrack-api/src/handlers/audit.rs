//! Audit handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use worktrack_service::{AuditEventResponse, AuditService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for the audit feed
#[derive(Debug, Deserialize)]
pub struct AuditParams {
    pub user_id: Uuid,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// One employee's merged activity feed
///
/// GET /admin/audit?user_id=...&limit=100
pub async fn user_audit(
    State(state): State<AppState>,
    Query(params): Query<AuditParams>,
) -> ApiResult<Json<Vec<AuditEventResponse>>> {
    let service = AuditService::new(state.service_context());
    let response = service.user_feed(params.user_id, params.limit).await?;
    Ok(Json(response))
}
