//! Audit service
//!
//! Merges one employee's time entries, leave requests, and timesheets into a
//! single timestamp-descending activity feed.

use tracing::instrument;
use uuid::Uuid;

use crate::dto::{AuditEventResponse, LeaveResponse, TimeEntryResponse, TimesheetResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One employee's merged activity feed, newest first
    #[instrument(skip(self))]
    pub async fn user_feed(&self, user_id: Uuid, limit: i64) -> ServiceResult<Vec<AuditEventResponse>> {
        let limit = limit.clamp(1, 500);

        let entries = self.ctx.time_entry_repo().list_for_user(user_id, limit).await?;
        let leaves = self.ctx.leave_repo().list_for_user(user_id, limit).await?;
        let sheets = self.ctx.timesheet_repo().list_for_user(user_id, limit).await?;

        let mut events = Vec::with_capacity(entries.len() + leaves.len() + sheets.len());

        for entry in &entries {
            events.push(AuditEventResponse {
                event_type: "time_entry",
                id: entry.id,
                timestamp: entry.start_time,
                payload: to_payload(&TimeEntryResponse::from(entry))?,
            });
        }
        for leave in &leaves {
            events.push(AuditEventResponse {
                event_type: "leave_request",
                id: leave.id,
                timestamp: leave.created_at,
                payload: to_payload(&LeaveResponse::from(leave))?,
            });
        }
        for sheet in &sheets {
            events.push(AuditEventResponse {
                event_type: "timesheet",
                id: sheet.id,
                timestamp: sheet.created_at,
                payload: to_payload(&TimesheetResponse::from(sheet))?,
            });
        }

        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(events)
    }
}

fn to_payload<T: serde::Serialize>(value: &T) -> ServiceResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ServiceError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;
    use chrono::{Duration, Utc};
    use worktrack_core::entities::{LeaveRequest, LeaveType, TimeEntry};
    use worktrack_core::traits::TimeEntryRepository;

    #[tokio::test]
    async fn test_feed_merges_and_sorts_descending() {
        let (ctx, fakes) = test_context();
        let user_id = Uuid::new_v4();

        let mut entry = TimeEntry::open(user_id, None);
        entry.start_time = Utc::now() - Duration::hours(2);
        fakes.time_entries.create(&entry).await.unwrap();

        let leave = LeaveRequest::new(
            user_id,
            LeaveType::Sick,
            (Utc::now() - Duration::days(1)).date_naive(),
            Utc::now().date_naive(),
            None,
        );
        fakes.leaves.seed(leave);

        let feed = AuditService::new(&ctx).user_feed(user_id, 50).await.unwrap();
        assert_eq!(feed.len(), 2);
        // Leave was created "now", the entry started two hours ago
        assert_eq!(feed[0].event_type, "leave_request");
        assert_eq!(feed[1].event_type, "time_entry");
        assert!(feed[0].timestamp >= feed[1].timestamp);
    }

    #[tokio::test]
    async fn test_feed_empty_for_unknown_user() {
        let (ctx, _fakes) = test_context();
        let feed = AuditService::new(&ctx)
            .user_feed(Uuid::new_v4(), 50)
            .await
            .unwrap();
        assert!(feed.is_empty());
    }
}
