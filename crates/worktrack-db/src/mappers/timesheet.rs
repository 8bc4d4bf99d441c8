//! Timesheet entity <-> model mapper

use worktrack_core::entities::{Timesheet, TimesheetStatus};

use crate::models::TimesheetModel;

/// Convert database status string to TimesheetStatus
fn parse_status(s: &str) -> TimesheetStatus {
    s.parse().unwrap_or(TimesheetStatus::Submitted)
}

/// Convert TimesheetModel to Timesheet entity
impl From<TimesheetModel> for Timesheet {
    fn from(model: TimesheetModel) -> Self {
        Timesheet {
            id: model.id,
            user_id: model.user_id,
            week_start: model.week_start,
            week_end: model.week_end,
            total_hours: model.total_hours,
            status: parse_status(&model.status),
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}
