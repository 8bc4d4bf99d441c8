//! Attendance handlers
//!
//! Clock actions come in as a path segment (clock-in, clock-out,
//! break-start, break-end) with the employee ID in the body.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use worktrack_service::{AttendanceService, ClockAction, ClockRequest, TimeEntryResponse};

use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Apply a clock action
///
/// POST /employee/time/:action
pub async fn clock_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Json(request): Json<ClockRequest>,
) -> ApiResult<NoContent> {
    let action: ClockAction = action
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown clock action"))?;

    let service = AttendanceService::new(state.service_context());
    service.clock(action, request.user_id).await?;
    Ok(NoContent)
}

/// Query parameters for recent time entries
#[derive(Debug, Deserialize)]
pub struct RecentEntriesParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Most recent time entries across the workforce
///
/// GET /admin/time-entries?limit=10
pub async fn list_time_entries(
    State(state): State<AppState>,
    Query(params): Query<RecentEntriesParams>,
) -> ApiResult<Json<Vec<TimeEntryResponse>>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.list_recent(params.limit).await?;
    Ok(Json(response))
}
