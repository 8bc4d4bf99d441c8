//! Employee handlers

use axum::{extract::State, Json};
use worktrack_service::{EmployeeDetailResponse, EmployeeService, ProfileResponse};

use crate::extractors::UuidPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all employees
///
/// GET /admin/employees
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// One employee's profile with recent timesheets and leave requests
///
/// GET /admin/employees/:id
pub async fn employee_detail(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<Json<EmployeeDetailResponse>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.detail(id).await?;
    Ok(Json(response))
}
