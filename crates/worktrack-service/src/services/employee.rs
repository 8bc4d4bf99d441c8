//! Employee service
//!
//! Admin views over employee profiles and their recent activity.

use tracing::instrument;
use uuid::Uuid;

use worktrack_core::DomainError;

use crate::dto::{EmployeeDetailResponse, LeaveResponse, ProfileResponse, TimesheetResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How much recent activity the detail view pulls in
const DETAIL_LIMIT: i64 = 20;

/// Employee service
pub struct EmployeeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmployeeService<'a> {
    /// Create a new EmployeeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all employee profiles newest-first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProfileResponse>> {
        let profiles = self.ctx.profile_repo().list().await?;
        Ok(profiles.iter().map(ProfileResponse::from).collect())
    }

    /// One employee's profile plus recent timesheets and leave requests
    #[instrument(skip(self))]
    pub async fn detail(&self, id: Uuid) -> ServiceResult<EmployeeDetailResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProfileNotFound(id))?;

        let timesheets = self
            .ctx
            .timesheet_repo()
            .list_for_user(id, DETAIL_LIMIT)
            .await?;
        let leaves = self.ctx.leave_repo().list_for_user(id, DETAIL_LIMIT).await?;

        Ok(EmployeeDetailResponse {
            profile: ProfileResponse::from(profile),
            timesheets: timesheets.iter().map(TimesheetResponse::from).collect(),
            leaves: leaves.iter().map(LeaveResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;
    use worktrack_core::entities::{Profile, ProfileRole};

    #[tokio::test]
    async fn test_detail_unknown_profile_is_not_found() {
        let (ctx, _fakes) = test_context();

        let err = EmployeeService::new(&ctx)
            .detail(Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_detail_returns_profile() {
        let (ctx, fakes) = test_context();
        let profile = Profile::new(
            "Ada Field".to_string(),
            "ada@example.com".to_string(),
            None,
            ProfileRole::Employee,
        );
        fakes.profiles.seed(profile.clone());

        let detail = EmployeeService::new(&ctx).detail(profile.id).await.unwrap();
        assert_eq!(detail.profile.full_name, "Ada Field");
        assert!(detail.timesheets.is_empty());
        assert!(detail.leaves.is_empty());
    }
}
