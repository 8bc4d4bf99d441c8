//! PostgreSQL implementation of TimesheetRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use worktrack_core::entities::{Timesheet, TimesheetStatus};
use worktrack_core::traits::{RepoResult, TimesheetRepository};

use crate::models::TimesheetModel;

use super::error::{map_db_error, timesheet_not_found};

const SHEET_COLUMNS: &str =
    "id, user_id, week_start, week_end, total_hours, status, notes, created_at";

/// PostgreSQL implementation of TimesheetRepository
#[derive(Clone)]
pub struct PgTimesheetRepository {
    pool: PgPool,
}

impl PgTimesheetRepository {
    /// Create a new PgTimesheetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimesheetRepository for PgTimesheetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Timesheet>> {
        let result = sqlx::query_as::<_, TimesheetModel>(&format!(
            "SELECT {SHEET_COLUMNS} FROM timesheets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Timesheet::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Timesheet>> {
        let rows = sqlx::query_as::<_, TimesheetModel>(&format!(
            "SELECT {SHEET_COLUMNS} FROM timesheets ORDER BY week_start DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Timesheet::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<Timesheet>> {
        let rows = sqlx::query_as::<_, TimesheetModel>(&format!(
            "SELECT {SHEET_COLUMNS} FROM timesheets WHERE user_id = $1 ORDER BY week_start DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Timesheet::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Timesheet>> {
        let rows = sqlx::query_as::<_, TimesheetModel>(&format!(
            "SELECT {SHEET_COLUMNS} FROM timesheets WHERE week_start >= $1 AND week_end <= $2 ORDER BY week_start DESC"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Timesheet::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        id: Uuid,
        status: TimesheetStatus,
        notes: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE timesheets
            SET status = $2, notes = COALESCE($3, notes)
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(notes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(timesheet_not_found(id));
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
        assert_send_sync::<PgTimesheetRepository>();
    }
}
