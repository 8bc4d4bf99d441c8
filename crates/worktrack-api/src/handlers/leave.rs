//! Leave handlers

use axum::{extract::State, Json};
use worktrack_service::{CreateLeaveRequest, LeaveResponse, LeaveService};

use crate::extractors::{UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// File a leave request
///
/// POST /employee/leave
pub async fn create_leave(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateLeaveRequest>,
) -> ApiResult<Created<Json<LeaveResponse>>> {
    let service = LeaveService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Approve a leave request
///
/// POST /admin/leave/:id/approve
pub async fn approve_leave(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<NoContent> {
    let service = LeaveService::new(state.service_context());
    service.approve(id).await?;
    Ok(NoContent)
}
