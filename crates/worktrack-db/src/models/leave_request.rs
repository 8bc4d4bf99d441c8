//! Leave request database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the leave_requests table
#[derive(Debug, Clone, FromRow)]
pub struct LeaveRequestModel {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Type: 'ANNUAL', 'SICK', 'UNPAID', 'OTHER' (stored as TEXT)
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    /// Status: 'PENDING', 'APPROVED', 'REJECTED' (stored as TEXT)
    pub status: String,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
