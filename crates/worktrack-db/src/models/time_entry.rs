//! Time entry database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the time_entries table
#[derive(Debug, Clone, FromRow)]
pub struct TimeEntryModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_break: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimeEntryModel {
    /// Check if the entry is still running
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
