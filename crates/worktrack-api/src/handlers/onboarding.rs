//! Onboarding handlers
//!
//! Signup plus the admin review queue with approve/reject decisions.

use axum::{extract::State, Json};
use worktrack_service::{
    ApproveApplicantResponse, OnboardingService, ProfileResponse, RejectApplicantRequest,
    SignupRequest, SignupResponse,
};

use crate::extractors::{UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new profile
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<SignupResponse>>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Applicants awaiting review
///
/// GET /admin/onboarding
pub async fn onboarding_queue(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.queue().await?;
    Ok(Json(response))
}

/// Approve an applicant
///
/// POST /admin/onboarding/:id/approve
pub async fn approve_applicant(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<Json<ApproveApplicantResponse>> {
    let service = OnboardingService::new(state.service_context());
    let response = service.approve(id).await?;
    Ok(Json(response))
}

/// Reject an applicant
///
/// POST /admin/onboarding/:id/reject
pub async fn reject_applicant(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    body: Option<Json<RejectApplicantRequest>>,
) -> ApiResult<NoContent> {
    let service = OnboardingService::new(state.service_context());
    let reason = body.and_then(|b| b.0.reason);
    service.reject(id, reason).await?;
    Ok(NoContent)
}
