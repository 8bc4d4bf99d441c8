//! OTP record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the task_client_otps table
///
/// Rows are insert-once; only `attempts` and `expires_at` are ever updated.
#[derive(Debug, Clone, FromRow)]
pub struct OtpRecordModel {
    pub id: Uuid,
    pub task_id: Uuid,
    pub otp_hash: String,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OtpRecordModel {
    /// Check if the record has passed its expiry instant
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
