//! Timesheet service

use chrono::{Duration, NaiveDate};
use tracing::{info, instrument};
use uuid::Uuid;

use worktrack_core::entities::TimesheetStatus;

use crate::dto::TimesheetResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Timesheet service
pub struct TimesheetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TimesheetService<'a> {
    /// Create a new TimesheetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All timesheets, newest week first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TimesheetResponse>> {
        let sheets = self.ctx.timesheet_repo().list().await?;
        Ok(sheets.iter().map(TimesheetResponse::from).collect())
    }

    /// Approve a timesheet
    #[instrument(skip(self))]
    pub async fn approve(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx
            .timesheet_repo()
            .set_status(id, TimesheetStatus::Approved, None)
            .await?;
        info!(timesheet_id = %id, "Timesheet approved");
        Ok(())
    }

    /// Return a timesheet for rework, storing the reviewer's reason
    #[instrument(skip(self, reason))]
    pub async fn return_for_rework(&self, id: Uuid, reason: Option<String>) -> ServiceResult<()> {
        self.ctx
            .timesheet_repo()
            .set_status(id, TimesheetStatus::Returned, reason.as_deref())
            .await?;
        info!(timesheet_id = %id, "Timesheet returned");
        Ok(())
    }

    /// Timesheets for the week beginning at `start`
    #[instrument(skip(self))]
    pub async fn week(&self, start: NaiveDate) -> ServiceResult<Vec<TimesheetResponse>> {
        let end = start + Duration::days(7);
        let sheets = self.ctx.timesheet_repo().list_in_range(start, end).await?;
        Ok(sheets.iter().map(TimesheetResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;
    use chrono::Utc;
    use worktrack_core::entities::Timesheet;

    fn seed_sheet(fakes: &crate::services::testing::Fakes, week_start: NaiveDate) -> Timesheet {
        let sheet = Timesheet {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            week_start,
            week_end: week_start + Duration::days(6),
            total_hours: 38.5,
            status: TimesheetStatus::Submitted,
            notes: None,
            created_at: Utc::now(),
        };
        fakes.timesheets.seed(sheet.clone());
        sheet
    }

    #[tokio::test]
    async fn test_approve_sets_status() {
        let (ctx, fakes) = test_context();
        let sheet = seed_sheet(&fakes, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());

        TimesheetService::new(&ctx).approve(sheet.id).await.unwrap();
        assert_eq!(fakes.timesheets.get(sheet.id).unwrap().status, TimesheetStatus::Approved);
    }

    #[tokio::test]
    async fn test_return_records_reason() {
        let (ctx, fakes) = test_context();
        let sheet = seed_sheet(&fakes, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());

        TimesheetService::new(&ctx)
            .return_for_rework(sheet.id, Some("Missing Friday hours".to_string()))
            .await
            .unwrap();

        let stored = fakes.timesheets.get(sheet.id).unwrap();
        assert_eq!(stored.status, TimesheetStatus::Returned);
        assert_eq!(stored.notes.as_deref(), Some("Missing Friday hours"));
    }

    #[tokio::test]
    async fn test_week_filters_range() {
        let (ctx, fakes) = test_context();
        let in_week = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        seed_sheet(&fakes, in_week);
        seed_sheet(&fakes, in_week + Duration::days(21));

        let sheets = TimesheetService::new(&ctx).week(in_week).await.unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].week_start, in_week);
    }

    #[tokio::test]
    async fn test_approve_unknown_sheet_is_not_found() {
        let (ctx, _fakes) = test_context();
        let err = TimesheetService::new(&ctx).approve(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
