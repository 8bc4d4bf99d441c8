//! PostgreSQL implementation of OtpRepository
//!
//! Rows in task_client_otps are never deleted; the issuance history is both
//! the audit trail and the rate-limit ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use worktrack_core::entities::{OtpRecord, OTP_MAX_ATTEMPTS};
use worktrack_core::traits::{OtpRepository, RepoResult};

use crate::models::OtpRecordModel;

use super::error::map_db_error;

/// PostgreSQL implementation of OtpRepository
#[derive(Clone)]
pub struct PgOtpRepository {
    pool: PgPool,
}

impl PgOtpRepository {
    /// Create a new PgOtpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpRepository for PgOtpRepository {
    #[instrument(skip(self, record), fields(task_id = %record.task_id))]
    async fn create(&self, record: &OtpRecord) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO task_client_otps (id, task_id, otp_hash, attempts, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(record.id)
        .bind(record.task_id)
        .bind(&record.otp_hash)
        .bind(record.attempts)
        .bind(record.created_at)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_latest_for_task(&self, task_id: Uuid) -> RepoResult<Option<OtpRecord>> {
        let result = sqlx::query_as::<_, OtpRecordModel>(
            r"
            SELECT id, task_id, otp_hash, attempts, created_at, expires_at
            FROM task_client_otps
            WHERE task_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            ",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(OtpRecord::from))
    }

    #[instrument(skip(self))]
    async fn count_created_since(&self, task_id: Uuid, cutoff: DateTime<Utc>) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM task_client_otps
            WHERE task_id = $1 AND created_at > $2
            ",
        )
        .bind(task_id)
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn record_failed_attempt(&self, id: Uuid) -> RepoResult<bool> {
        // Conditional update: racing wrong guesses cannot both slip under
        // the ceiling because the guard re-checks inside the statement.
        let result = sqlx::query(
            r"
            UPDATE task_client_otps
            SET attempts = attempts + 1
            WHERE id = $1 AND attempts < $2
            ",
        )
        .bind(id)
        .bind(OTP_MAX_ATTEMPTS)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn consume(&self, id: Uuid, now: DateTime<Utc>) -> RepoResult<()> {
        // Attempts and expiry move together in one statement: the forced
        // expiry is the consumption marker, the increment keeps the attempt
        // count equal to total verification calls.
        sqlx::query(
            r"
            UPDATE task_client_otps
            SET attempts = attempts + 1, expires_at = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgOtpRepository>();
    }
}
