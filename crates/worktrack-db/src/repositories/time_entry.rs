//! PostgreSQL implementation of TimeEntryRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use worktrack_core::entities::TimeEntry;
use worktrack_core::traits::{RepoResult, TimeEntryRepository};

use crate::models::TimeEntryModel;

use super::error::map_db_error;

const ENTRY_COLUMNS: &str =
    "id, user_id, task_id, start_time, end_time, is_break, notes, created_at";

/// PostgreSQL implementation of TimeEntryRepository
#[derive(Clone)]
pub struct PgTimeEntryRepository {
    pool: PgPool,
}

impl PgTimeEntryRepository {
    /// Create a new PgTimeEntryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeEntryRepository for PgTimeEntryRepository {
    #[instrument(skip(self, entry), fields(user_id = %entry.user_id))]
    async fn create(&self, entry: &TimeEntry) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO time_entries (id, user_id, task_id, start_time, end_time, is_break, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.task_id)
        .bind(entry.start_time)
        .bind(entry.end_time)
        .bind(entry.is_break)
        .bind(&entry.notes)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn close_latest_open(&self, user_id: Uuid, end_time: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE time_entries
            SET end_time = $2
            WHERE id = (
                SELECT id FROM time_entries
                WHERE user_id = $1 AND end_time IS NULL
                ORDER BY start_time DESC
                LIMIT 1
            )
            ",
        )
        .bind(user_id)
        .bind(end_time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TimeEntry>> {
        let rows = sqlx::query_as::<_, TimeEntryModel>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM time_entries ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TimeEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<TimeEntry>> {
        let rows = sqlx::query_as::<_, TimeEntryModel>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM time_entries WHERE user_id = $1 ORDER BY start_time DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TimeEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTimeEntryRepository>();
    }
}
