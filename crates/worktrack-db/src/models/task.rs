//! Task database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the tasks table
#[derive(Debug, Clone, FromRow)]
pub struct TaskModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub client_id: Option<Uuid>,
    pub assignee: Option<Uuid>,
    /// Status: 'PENDING', 'IN_PROGRESS', 'DONE' (stored as TEXT)
    pub status: String,
    /// Priority: 'LOW', 'MEDIUM', 'HIGH' (stored as TEXT)
    pub priority: String,
    pub estimated_hours: f64,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TaskModel {
    /// Check if the task reached its terminal state
    #[inline]
    pub fn is_done(&self) -> bool {
        self.status == "DONE"
    }
}
