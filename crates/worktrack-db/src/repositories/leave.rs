//! PostgreSQL implementation of LeaveRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use worktrack_core::entities::{LeaveRequest, LeaveStatus};
use worktrack_core::traits::{LeaveRepository, RepoResult};

use crate::models::LeaveRequestModel;

use super::error::{leave_request_not_found, map_db_error};

const LEAVE_COLUMNS: &str =
    "id, user_id, leave_type, start_date, end_date, reason, status, decided_at, created_at";

/// PostgreSQL implementation of LeaveRepository
#[derive(Clone)]
pub struct PgLeaveRepository {
    pool: PgPool,
}

impl PgLeaveRepository {
    /// Create a new PgLeaveRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaveRepository for PgLeaveRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<LeaveRequest>> {
        let result = sqlx::query_as::<_, LeaveRequestModel>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LeaveRequest::from))
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    async fn create(&self, request: &LeaveRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO leave_requests (id, user_id, leave_type, start_date, end_date, reason,
                                        status, decided_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(request.id)
        .bind(request.user_id)
        .bind(request.leave_type.as_str())
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(&request.reason)
        .bind(request.status.as_str())
        .bind(request.decided_at)
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<LeaveRequest>> {
        let rows = sqlx::query_as::<_, LeaveRequestModel>(&format!(
            "SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LeaveRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        decided_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE leave_requests
            SET status = $2, decided_at = $3
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(decided_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(leave_request_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLeaveRepository>();
    }
}
