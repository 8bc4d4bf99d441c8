//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::entities::{
    Client, LeaveRequest, LeaveStatus, OtpRecord, Profile, ProfileStatus, Task, TaskPriority,
    TaskStatus, TimeEntry, Timesheet, TimesheetStatus,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// OTP Repository
// ============================================================================

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Insert a freshly issued record
    async fn create(&self, record: &OtpRecord) -> RepoResult<()>;

    /// The record with the greatest created_at for the task, if any.
    /// This is the only record verification ever consults.
    async fn find_latest_for_task(&self, task_id: Uuid) -> RepoResult<Option<OtpRecord>>;

    /// Count records for the task created strictly after the cutoff.
    /// The issuance history is the rate-limit ledger.
    async fn count_created_since(&self, task_id: Uuid, cutoff: DateTime<Utc>) -> RepoResult<i64>;

    /// Increment attempts after a failed verification. The update is
    /// conditional on the ceiling not having been reached, so racing wrong
    /// guesses cannot both slip under it. Returns false if the guard failed.
    async fn record_failed_attempt(&self, id: Uuid) -> RepoResult<bool>;

    /// Consume the record: increment attempts and force expiry to `now` in a
    /// single update, so the same code can never verify twice.
    async fn consume(&self, id: Uuid, now: DateTime<Utc>) -> RepoResult<()>;
}

// ============================================================================
// Task Repository
// ============================================================================

/// One page of tasks plus the total row count
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total: i64,
}

/// Partial update of a task; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub client_id: Option<Option<Uuid>>,
    pub assignee: Option<Option<Uuid>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub estimated_hours: Option<f64>,
    pub due_date: Option<Option<NaiveDate>>,
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Task>>;

    /// List tasks newest-first with offset pagination
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<TaskPage>;

    /// Create a new task
    async fn create(&self, task: &Task) -> RepoResult<()>;

    /// Apply a partial update
    async fn update(&self, id: Uuid, changes: &TaskChanges) -> RepoResult<Task>;

    /// Delete a task
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Set the task status (non-terminal transitions)
    async fn set_status(&self, id: Uuid, status: TaskStatus) -> RepoResult<()>;

    /// Terminal transition: mark the task done and stamp completion time.
    /// Reserved for the OTP-verified completion path.
    async fn complete(&self, id: Uuid, completed_at: DateTime<Utc>) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// List all profiles newest-first
    async fn list(&self) -> RepoResult<Vec<Profile>>;

    /// List profiles in a given status newest-first (the onboarding queue)
    async fn list_by_status(&self, status: ProfileStatus) -> RepoResult<Vec<Profile>>;

    /// Check if the email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new profile
    async fn create(&self, profile: &Profile) -> RepoResult<()>;

    /// Update status and (optionally) assign an employee code
    async fn set_status(
        &self,
        id: Uuid,
        status: ProfileStatus,
        employee_code: Option<&str>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Client Repository
// ============================================================================

/// Partial update of a client; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub contact_email: Option<Option<String>>,
    pub contact_phone: Option<Option<String>>,
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find client by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Client>>;

    /// List all clients newest-first
    async fn list(&self) -> RepoResult<Vec<Client>>;

    /// Create a new client
    async fn create(&self, client: &Client) -> RepoResult<()>;

    /// Apply a partial update
    async fn update(&self, id: Uuid, changes: &ClientChanges) -> RepoResult<Client>;

    /// Delete a client
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Time Entry Repository
// ============================================================================

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Insert a new (open) entry
    async fn create(&self, entry: &TimeEntry) -> RepoResult<()>;

    /// Close the user's most recent open entry. Returns false if none open.
    async fn close_latest_open(&self, user_id: Uuid, end_time: DateTime<Utc>) -> RepoResult<bool>;

    /// Most recent entries across all users
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TimeEntry>>;

    /// Most recent entries for one user
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<TimeEntry>>;
}

// ============================================================================
// Timesheet Repository
// ============================================================================

#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    /// Find timesheet by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Timesheet>>;

    /// All timesheets, newest week first
    async fn list(&self) -> RepoResult<Vec<Timesheet>>;

    /// Most recent timesheets for one user
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<Timesheet>>;

    /// Timesheets whose week falls within [start, end]
    async fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Timesheet>>;

    /// Update review status; `notes` replaces reviewer notes when given
    async fn set_status(
        &self,
        id: Uuid,
        status: TimesheetStatus,
        notes: Option<&str>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Leave Repository
// ============================================================================

#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// Find leave request by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<LeaveRequest>>;

    /// Create a new request
    async fn create(&self, request: &LeaveRequest) -> RepoResult<()>;

    /// Most recent requests for one user
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<LeaveRequest>>;

    /// Record the review decision
    async fn set_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        decided_at: DateTime<Utc>,
    ) -> RepoResult<()>;
}
