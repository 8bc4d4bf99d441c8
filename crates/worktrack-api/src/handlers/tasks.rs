//! Task handlers
//!
//! Admin task CRUD, OTP issuance, and the employee-facing start/complete
//! endpoints. Completion is the only route that can move a task to Done, and
//! it does so strictly through code verification.

use axum::{extract::State, http::StatusCode, Json};
use worktrack_core::entities::OtpOutcome;
use worktrack_service::{
    CompleteTaskRequest, CompleteTaskResponse, CreateTaskRequest, IssueOtpRequest,
    OtpIssuedResponse, TaskListResponse, TaskResponse, TaskService, UpdateTaskRequest,
};

use crate::extractors::{OptionalValidatedJson, Pagination, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List tasks with pagination
///
/// GET /admin/tasks?page=1&limit=20
pub async fn list_tasks(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<TaskListResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service.list(pagination.page, pagination.limit).await?;
    Ok(Json(response))
}

/// Create a task
///
/// POST /admin/tasks
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<Created<Json<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Partially update a task
///
/// PATCH /admin/tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Delete a task
///
/// DELETE /admin/tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<NoContent> {
    let service = TaskService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

/// Issue a verification code for a task and email it to the client
///
/// POST /admin/tasks/:id/otp
pub async fn issue_task_otp(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    OptionalValidatedJson(request): OptionalValidatedJson<IssueOtpRequest>,
) -> ApiResult<Json<OtpIssuedResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service
        .issue_completion_code(id, request.unwrap_or_default())
        .await?;
    Ok(Json(response))
}

/// Start working a task
///
/// POST /employee/tasks/:id/start
pub async fn start_task(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<NoContent> {
    let service = TaskService::new(state.service_context());
    service.start(id).await?;
    Ok(NoContent)
}

/// Complete a task with a client verification code
///
/// POST /employee/tasks/:id/complete
///
/// Each verification outcome maps to its own status and message so the
/// worker knows whether to retry the same code, request a new one, or stop.
pub async fn complete_task(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<CompleteTaskRequest>,
) -> ApiResult<(StatusCode, Json<CompleteTaskResponse>)> {
    let service = TaskService::new(state.service_context());
    let outcome = service.complete_with_code(id, &request.otp).await?;

    let status = match outcome {
        OtpOutcome::Success => StatusCode::OK,
        OtpOutcome::NotFound => StatusCode::NOT_FOUND,
        OtpOutcome::Expired | OtpOutcome::MaxAttemptsExceeded | OtpOutcome::Invalid => {
            StatusCode::BAD_REQUEST
        }
    };

    Ok((status, Json(CompleteTaskResponse::from_outcome(outcome))))
}
