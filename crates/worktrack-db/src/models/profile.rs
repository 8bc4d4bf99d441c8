//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Role: 'ADMIN' or 'EMPLOYEE' (stored as TEXT)
    pub role: String,
    /// Status: 'PENDING_REVIEW', 'ACTIVE', 'REJECTED' (stored as TEXT)
    pub status: String,
    pub employee_code: Option<String>,
    pub created_at: DateTime<Utc>,
}
