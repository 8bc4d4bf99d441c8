//! Leave service

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use worktrack_core::entities::{LeaveRequest, LeaveStatus};

use crate::dto::{CreateLeaveRequest, LeaveResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Leave service
pub struct LeaveService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaveService<'a> {
    /// Create a new LeaveService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a new leave request
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create(&self, request: CreateLeaveRequest) -> ServiceResult<LeaveResponse> {
        if request.end_date < request.start_date {
            return Err(ServiceError::validation("end_date must not precede start_date"));
        }

        let leave = LeaveRequest::new(
            request.user_id,
            request.leave_type,
            request.start_date,
            request.end_date,
            request.reason,
        );
        self.ctx.leave_repo().create(&leave).await?;

        info!(leave_id = %leave.id, "Leave request filed");
        Ok(LeaveResponse::from(leave))
    }

    /// Approve a leave request
    #[instrument(skip(self))]
    pub async fn approve(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx
            .leave_repo()
            .set_status(id, LeaveStatus::Approved, Utc::now())
            .await?;
        info!(leave_id = %id, "Leave request approved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;
    use chrono::NaiveDate;
    use worktrack_core::entities::LeaveType;

    fn leave_request(start: (i32, u32, u32), end: (i32, u32, u32)) -> CreateLeaveRequest {
        CreateLeaveRequest {
            user_id: Uuid::new_v4(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            reason: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_approve() {
        let (ctx, fakes) = test_context();
        let service = LeaveService::new(&ctx);

        let created = service
            .create(leave_request((2025, 7, 7), (2025, 7, 11)))
            .await
            .unwrap();
        assert_eq!(created.status, LeaveStatus::Pending);

        service.approve(created.id).await.unwrap();
        let stored = fakes.leaves.get(created.id).unwrap();
        assert_eq!(stored.status, LeaveStatus::Approved);
        assert!(stored.decided_at.is_some());
    }

    #[tokio::test]
    async fn test_inverted_dates_are_rejected() {
        let (ctx, _fakes) = test_context();

        let err = LeaveService::new(&ctx)
            .create(leave_request((2025, 7, 11), (2025, 7, 7)))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
    }
}
