//! Timesheet handlers

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use worktrack_service::{ReturnTimesheetRequest, TimesheetResponse, TimesheetService};

use crate::extractors::UuidPath;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// All timesheets, newest week first
///
/// GET /admin/timesheets
pub async fn list_timesheets(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TimesheetResponse>>> {
    let service = TimesheetService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Approve a timesheet
///
/// POST /admin/timesheets/:id/approve
pub async fn approve_timesheet(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<NoContent> {
    let service = TimesheetService::new(state.service_context());
    service.approve(id).await?;
    Ok(NoContent)
}

/// Return a timesheet for rework
///
/// POST /admin/timesheets/:id/return
pub async fn return_timesheet(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    body: Option<Json<ReturnTimesheetRequest>>,
) -> ApiResult<NoContent> {
    let service = TimesheetService::new(state.service_context());
    let reason = body.and_then(|b| b.0.reason);
    service.return_for_rework(id, reason).await?;
    Ok(NoContent)
}

/// Query parameters for the weekly view
#[derive(Debug, Deserialize)]
pub struct WeekParams {
    /// Week start date, YYYY-MM-DD
    pub start: String,
}

/// Timesheets for the week beginning at `start`
///
/// GET /employee/timesheets/week?start=2025-03-03
pub async fn week_timesheets(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> ApiResult<Json<Vec<TimesheetResponse>>> {
    let start: NaiveDate = params
        .start
        .parse()
        .map_err(|_| ApiError::invalid_query("start must be YYYY-MM-DD"))?;

    let service = TimesheetService::new(state.service_context());
    let response = service.week(start).await?;
    Ok(Json(response))
}
