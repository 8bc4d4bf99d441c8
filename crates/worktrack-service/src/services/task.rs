//! Task service
//!
//! Task CRUD plus the two OTP-facing operations: issuing a verification code
//! to the client and the code-gated terminal transition to Done.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use worktrack_common::render_task_otp_email;
use worktrack_core::entities::{OtpOutcome, Task, TaskStatus, TimeEntry};
use worktrack_core::traits::TaskChanges;
use worktrack_core::DomainError;

use crate::dto::{
    CreateTaskRequest, IssueOtpRequest, OtpIssuedResponse, PageMeta, TaskListResponse,
    TaskResponse, UpdateTaskRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::otp::OtpService;

/// Task service
pub struct TaskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskService<'a> {
    /// Create a new TaskService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List tasks newest-first, enriched with client and assignee names
    #[instrument(skip(self))]
    pub async fn list(&self, page: i64, limit: i64) -> ServiceResult<TaskListResponse> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        let offset = (page - 1) * limit;

        let task_page = self.ctx.task_repo().list(offset, limit).await?;

        // Resolve display names for the distinct related records
        let mut client_names: HashMap<Uuid, String> = HashMap::new();
        let mut assignee_names: HashMap<Uuid, String> = HashMap::new();

        for task in &task_page.tasks {
            if let Some(client_id) = task.client_id {
                if !client_names.contains_key(&client_id) {
                    if let Some(client) = self.ctx.client_repo().find_by_id(client_id).await? {
                        client_names.insert(client_id, client.name);
                    }
                }
            }
            if let Some(assignee) = task.assignee {
                if !assignee_names.contains_key(&assignee) {
                    if let Some(profile) = self.ctx.profile_repo().find_by_id(assignee).await? {
                        assignee_names.insert(assignee, profile.full_name);
                    }
                }
            }
        }

        let tasks = task_page
            .tasks
            .iter()
            .map(|task| {
                TaskResponse::from(task).with_names(
                    task.client_id.and_then(|id| client_names.get(&id).cloned()),
                    task.assignee.and_then(|id| assignee_names.get(&id).cloned()),
                )
            })
            .collect();

        Ok(TaskListResponse {
            tasks,
            meta: PageMeta {
                total: task_page.total,
                page,
                limit,
            },
        })
    }

    /// Create a new task
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateTaskRequest) -> ServiceResult<TaskResponse> {
        let mut task = Task::new(request.title, request.client_id, request.assignee);
        task.description = request.description;
        task.status = request.status;
        task.priority = request.priority;
        task.estimated_hours = request.estimated_hours;
        task.due_date = request.due_date;

        self.ctx.task_repo().create(&task).await?;

        info!(task_id = %task.id, "Task created");
        Ok(TaskResponse::from(task))
    }

    /// Apply a partial update to a task
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateTaskRequest) -> ServiceResult<TaskResponse> {
        let changes = TaskChanges {
            title: request.title,
            description: request.description.map(Some),
            client_id: request.client_id.map(Some),
            assignee: request.assignee.map(Some),
            status: request.status,
            priority: request.priority,
            estimated_hours: request.estimated_hours,
            due_date: request.due_date.map(Some),
        };

        let task = self.ctx.task_repo().update(id, &changes).await?;
        Ok(TaskResponse::from(task))
    }

    /// Delete a task
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.task_repo().delete(id).await?;
        Ok(())
    }

    /// Start working a task: open a task-scoped time entry for the assignee
    /// and move the status to InProgress
    #[instrument(skip(self))]
    pub async fn start(&self, id: Uuid) -> ServiceResult<()> {
        let task = self
            .ctx
            .task_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TaskNotFound(id))?;

        if let Some(assignee) = task.assignee {
            let entry = TimeEntry::open(assignee, Some(task.id));
            self.ctx.time_entry_repo().create(&entry).await?;
        }

        self.ctx.task_repo().set_status(id, TaskStatus::InProgress).await?;

        info!(task_id = %id, "Task started");
        Ok(())
    }

    /// Issue a verification code for the task and email it to the client.
    ///
    /// The engine returns the plaintext exactly once; it goes into the email
    /// and nowhere else. Delivery is best-effort - a failed send is logged
    /// and does not roll back the issuance.
    #[instrument(skip(self, request))]
    pub async fn issue_completion_code(
        &self,
        task_id: Uuid,
        request: IssueOtpRequest,
    ) -> ServiceResult<OtpIssuedResponse> {
        let issued = OtpService::new(self.ctx)
            .issue(task_id, request.ttl_hours)
            .await?;

        let recipient = match request.client_email {
            Some(email) => Some(email),
            None => match issued.task.client_id {
                Some(client_id) => self
                    .ctx
                    .client_repo()
                    .find_by_id(client_id)
                    .await?
                    .and_then(|c| c.contact_email),
                None => None,
            },
        };

        match recipient {
            Some(to) => {
                let body = render_task_otp_email(
                    &issued.code,
                    Some(issued.task.title.as_str()),
                    issued.ttl_hours,
                );
                if let Err(e) = self
                    .ctx
                    .mailer()
                    .send(&to, "Your verification code for task completion", body.html, body.text)
                    .await
                {
                    warn!(task_id = %task_id, error = %e, "Failed to send verification code email");
                }
            }
            None => {
                warn!(task_id = %task_id, "No recipient for verification code email");
            }
        }

        Ok(OtpIssuedResponse {
            task_id,
            ttl_hours: issued.ttl_hours,
            expires_at: issued.expires_at,
        })
    }

    /// Attempt the terminal transition: verify the submitted code and, only
    /// on Success, mark the task done with a completion timestamp. Every
    /// other outcome leaves the task untouched.
    #[instrument(skip(self, code))]
    pub async fn complete_with_code(&self, task_id: Uuid, code: &str) -> ServiceResult<OtpOutcome> {
        // The task must exist before any verification state is consulted
        self.ctx
            .task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or(DomainError::TaskNotFound(task_id))?;

        let outcome = OtpService::new(self.ctx)
            .verify_and_consume(task_id, code)
            .await?;

        if outcome.is_success() {
            self.ctx.task_repo().complete(task_id, Utc::now()).await?;
            info!(task_id = %task_id, "Task completed after code verification");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{seed_task, test_context};

    #[tokio::test]
    async fn test_complete_with_correct_code_marks_done() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        let issued = OtpService::new(&ctx).issue(task.id, None).await.unwrap();
        let outcome = TaskService::new(&ctx)
            .complete_with_code(task.id, &issued.code)
            .await
            .unwrap();

        assert_eq!(outcome, OtpOutcome::Success);
        let stored = fakes.tasks.get(task.id).unwrap();
        assert_eq!(stored.status, TaskStatus::Done);
        assert!(stored.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_complete_with_wrong_code_leaves_task_untouched() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        let issued = OtpService::new(&ctx).issue(task.id, None).await.unwrap();
        let wrong = if issued.code == "000000" { "000001" } else { "000000" };

        let outcome = TaskService::new(&ctx)
            .complete_with_code(task.id, wrong)
            .await
            .unwrap();

        assert_eq!(outcome, OtpOutcome::Invalid);
        let stored = fakes.tasks.get(task.id).unwrap();
        assert_eq!(stored.status, TaskStatus::Pending);
        assert!(stored.completed_at.is_none());
    }

    #[tokio::test]
    async fn test_complete_without_issued_code_is_not_found_outcome() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        let outcome = TaskService::new(&ctx)
            .complete_with_code(task.id, "123456")
            .await
            .unwrap();

        assert_eq!(outcome, OtpOutcome::NotFound);
        assert_eq!(fakes.tasks.get(task.id).unwrap().status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_complete_unknown_task_is_error() {
        let (ctx, _fakes) = test_context();

        let err = TaskService::new(&ctx)
            .complete_with_code(Uuid::new_v4(), "123456")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_start_opens_entry_for_assignee() {
        let (ctx, fakes) = test_context();
        let assignee = Uuid::new_v4();
        let task = Task::new("Survey site".to_string(), None, Some(assignee));
        fakes.tasks.seed(task.clone());

        TaskService::new(&ctx).start(task.id).await.unwrap();

        assert_eq!(fakes.tasks.get(task.id).unwrap().status, TaskStatus::InProgress);
        let entries = fakes.time_entries.all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, assignee);
        assert_eq!(entries[0].task_id, Some(task.id));
        assert!(entries[0].is_open());
    }

    #[tokio::test]
    async fn test_list_enriches_names() {
        let (ctx, fakes) = test_context();

        let client = worktrack_core::entities::Client::new(
            "Acme Facilities".to_string(),
            Some("ops@acme.example".to_string()),
            None,
        );
        fakes.clients.seed(client.clone());

        let task = Task::new("Quarterly audit".to_string(), Some(client.id), None);
        fakes.tasks.seed(task);

        let page = TaskService::new(&ctx).list(1, 20).await.unwrap();
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.tasks[0].client_name.as_deref(), Some("Acme Facilities"));
    }
}
