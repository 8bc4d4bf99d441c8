//! Attendance service
//!
//! Clock actions open and close time entries; admins can inspect the most
//! recent entries across the workforce.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use worktrack_core::entities::TimeEntry;

use crate::dto::TimeEntryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Clock action submitted by an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl std::str::FromStr for ClockAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock-in" => Ok(Self::ClockIn),
            "clock-out" => Ok(Self::ClockOut),
            "break-start" => Ok(Self::BreakStart),
            "break-end" => Ok(Self::BreakEnd),
            _ => Err(format!("Invalid clock action: {s}")),
        }
    }
}

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a clock action for an employee
    #[instrument(skip(self))]
    pub async fn clock(&self, action: ClockAction, user_id: Uuid) -> ServiceResult<()> {
        match action {
            ClockAction::ClockIn => {
                let entry = TimeEntry::open(user_id, None);
                self.ctx.time_entry_repo().create(&entry).await?;
                info!(user_id = %user_id, "Clocked in");
            }
            ClockAction::BreakStart => {
                let entry = TimeEntry::open_break(user_id);
                self.ctx.time_entry_repo().create(&entry).await?;
                info!(user_id = %user_id, "Break started");
            }
            ClockAction::ClockOut | ClockAction::BreakEnd => {
                let closed = self
                    .ctx
                    .time_entry_repo()
                    .close_latest_open(user_id, Utc::now())
                    .await?;
                if closed {
                    info!(user_id = %user_id, ?action, "Closed open entry");
                } else {
                    warn!(user_id = %user_id, ?action, "No open entry to close");
                }
            }
        }

        Ok(())
    }

    /// Most recent entries across all users
    #[instrument(skip(self))]
    pub async fn list_recent(&self, limit: i64) -> ServiceResult<Vec<TimeEntryResponse>> {
        let limit = limit.clamp(1, 200);
        let entries = self.ctx.time_entry_repo().list_recent(limit).await?;
        Ok(entries.iter().map(TimeEntryResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;

    #[tokio::test]
    async fn test_clock_in_then_out() {
        let (ctx, fakes) = test_context();
        let service = AttendanceService::new(&ctx);
        let user_id = Uuid::new_v4();

        service.clock(ClockAction::ClockIn, user_id).await.unwrap();
        let entries = fakes.time_entries.all();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_open());

        service.clock(ClockAction::ClockOut, user_id).await.unwrap();
        let entries = fakes.time_entries.all();
        assert!(entries[0].end_time.is_some());
    }

    #[tokio::test]
    async fn test_break_entries_are_flagged() {
        let (ctx, fakes) = test_context();
        let service = AttendanceService::new(&ctx);
        let user_id = Uuid::new_v4();

        service.clock(ClockAction::BreakStart, user_id).await.unwrap();
        assert!(fakes.time_entries.all()[0].is_break);

        service.clock(ClockAction::BreakEnd, user_id).await.unwrap();
        assert!(fakes.time_entries.all()[0].end_time.is_some());
    }

    #[tokio::test]
    async fn test_clock_out_with_nothing_open_is_ok() {
        let (ctx, _fakes) = test_context();
        // Nothing to close; the action is idempotent rather than an error
        assert!(AttendanceService::new(&ctx)
            .clock(ClockAction::ClockOut, Uuid::new_v4())
            .await
            .is_ok());
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("clock-in".parse::<ClockAction>().unwrap(), ClockAction::ClockIn);
        assert_eq!("break-end".parse::<ClockAction>().unwrap(), ClockAction::BreakEnd);
        assert!("sleep".parse::<ClockAction>().is_err());
    }
}
