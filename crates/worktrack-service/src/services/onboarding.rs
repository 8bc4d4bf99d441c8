//! Onboarding service
//!
//! Signup creates a profile awaiting review; admins approve (assigning an
//! employee code) or reject. Every decision sends a best-effort email.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use worktrack_common::{render_approval_email, render_rejection_email, render_welcome_email};
use worktrack_core::entities::{generate_employee_code, Profile, ProfileStatus};
use worktrack_core::DomainError;

use crate::dto::{ApproveApplicantResponse, ProfileResponse, SignupRequest, SignupResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Onboarding service
pub struct OnboardingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OnboardingService<'a> {
    /// Create a new OnboardingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new profile. Admins are active immediately; employees land
    /// in the review queue.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let profile = Profile::new(request.full_name, request.email, request.phone, request.role);
        self.ctx.profile_repo().create(&profile).await?;

        info!(profile_id = %profile.id, status = ?profile.status, "Profile registered");

        let body = render_welcome_email(&profile.full_name);
        if let Err(e) = self
            .ctx
            .mailer()
            .send(&profile.email, "Welcome to WorkTrack", body.html, body.text)
            .await
        {
            warn!(profile_id = %profile.id, error = %e, "Failed to send welcome email");
        }

        Ok(SignupResponse {
            id: profile.id,
            status: profile.status,
        })
    }

    /// Applicants awaiting review, newest first
    #[instrument(skip(self))]
    pub async fn queue(&self) -> ServiceResult<Vec<ProfileResponse>> {
        let applicants = self
            .ctx
            .profile_repo()
            .list_by_status(ProfileStatus::PendingReview)
            .await?;
        Ok(applicants.iter().map(ProfileResponse::from).collect())
    }

    /// Approve an applicant: activate the profile and assign an employee code
    #[instrument(skip(self))]
    pub async fn approve(&self, id: Uuid) -> ServiceResult<ApproveApplicantResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProfileNotFound(id))?;

        if !profile.is_pending() {
            return Err(DomainError::ProfileNotPending.into());
        }

        let employee_code = generate_employee_code();
        self.ctx
            .profile_repo()
            .set_status(id, ProfileStatus::Active, Some(&employee_code))
            .await?;

        info!(profile_id = %id, employee_code = %employee_code, "Applicant approved");

        let body = render_approval_email(&profile.full_name, self.ctx.app_url());
        if let Err(e) = self
            .ctx
            .mailer()
            .send(&profile.email, "Your account has been approved", body.html, body.text)
            .await
        {
            warn!(profile_id = %id, error = %e, "Failed to send approval email");
        }

        Ok(ApproveApplicantResponse { id, employee_code })
    }

    /// Reject an applicant
    #[instrument(skip(self, reason))]
    pub async fn reject(&self, id: Uuid, reason: Option<String>) -> ServiceResult<()> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProfileNotFound(id))?;

        self.ctx
            .profile_repo()
            .set_status(id, ProfileStatus::Rejected, None)
            .await?;

        info!(profile_id = %id, "Applicant rejected");

        let body = render_rejection_email(&profile.full_name, reason.as_deref());
        if let Err(e) = self
            .ctx
            .mailer()
            .send(&profile.email, "Application update", body.html, body.text)
            .await
        {
            warn!(profile_id = %id, error = %e, "Failed to send rejection email");
        }

        Ok(())
    }
}
