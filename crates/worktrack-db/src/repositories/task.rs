//! PostgreSQL implementation of TaskRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use worktrack_core::entities::{Task, TaskStatus};
use worktrack_core::traits::{RepoResult, TaskChanges, TaskPage, TaskRepository};

use crate::models::TaskModel;

use super::error::{map_db_error, task_not_found};

const TASK_COLUMNS: &str = "id, title, description, client_id, assignee, status, priority, \
                            estimated_hours, due_date, completed_at, created_at";

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new PgTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Task>> {
        let result = sqlx::query_as::<_, TaskModel>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Task::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<TaskPage> {
        let rows = sqlx::query_as::<_, TaskModel>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC OFFSET $1 LIMIT $2"
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(TaskPage {
            tasks: rows.into_iter().map(Task::from).collect(),
            total,
        })
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    async fn create(&self, task: &Task) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tasks (id, title, description, client_id, assignee, status, priority,
                               estimated_hours, due_date, completed_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.client_id)
        .bind(task.assignee)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.estimated_hours)
        .bind(task.due_date)
        .bind(task.completed_at)
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: &TaskChanges) -> RepoResult<Task> {
        // Read-modify-write: load the row, fold the partial changes into the
        // entity, write the mutable columns back.
        let mut task = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))?;

        if let Some(title) = &changes.title {
            task.title = title.clone();
        }
        if let Some(description) = &changes.description {
            task.description = description.clone();
        }
        if let Some(client_id) = changes.client_id {
            task.client_id = client_id;
        }
        if let Some(assignee) = changes.assignee {
            task.assignee = assignee;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(estimated_hours) = changes.estimated_hours {
            task.estimated_hours = estimated_hours;
        }
        if let Some(due_date) = changes.due_date {
            task.due_date = due_date;
        }

        let result = sqlx::query(
            r"
            UPDATE tasks
            SET title = $2, description = $3, client_id = $4, assignee = $5, status = $6,
                priority = $7, estimated_hours = $8, due_date = $9
            WHERE id = $1
            ",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.client_id)
        .bind(task.assignee)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.estimated_hours)
        .bind(task.due_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(id));
        }

        Ok(task)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: TaskStatus) -> RepoResult<()> {
        let result = sqlx::query("UPDATE tasks SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn complete(&self, id: Uuid, completed_at: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tasks
            SET status = 'DONE', completed_at = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(completed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(id));
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
        assert_send_sync::<PgTaskRepository>();
    }
}
