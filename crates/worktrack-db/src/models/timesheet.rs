//! Timesheet database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the timesheets table
#[derive(Debug, Clone, FromRow)]
pub struct TimesheetModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
    /// Status: 'SUBMITTED', 'APPROVED', 'RETURNED' (stored as TEXT)
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
