//! Service context - dependency container for services
//!
//! Holds all repositories, the presence store, and the mailer.

use std::sync::Arc;

use worktrack_cache::{PresenceStore, SharedRedisPool};
use worktrack_common::Mailer;
use worktrack_core::traits::{
    ClientRepository, LeaveRepository, OtpRepository, ProfileRepository, TaskRepository,
    TimeEntryRepository, TimesheetRepository,
};
use worktrack_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    client_repo: Arc<dyn ClientRepository>,
    task_repo: Arc<dyn TaskRepository>,
    otp_repo: Arc<dyn OtpRepository>,
    time_entry_repo: Arc<dyn TimeEntryRepository>,
    timesheet_repo: Arc<dyn TimesheetRepository>,
    leave_repo: Arc<dyn LeaveRepository>,

    // Cache stores
    presence_store: PresenceStore,

    // Outbound email
    mailer: Arc<Mailer>,

    // Public base URL used in onboarding emails
    app_url: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        profile_repo: Arc<dyn ProfileRepository>,
        client_repo: Arc<dyn ClientRepository>,
        task_repo: Arc<dyn TaskRepository>,
        otp_repo: Arc<dyn OtpRepository>,
        time_entry_repo: Arc<dyn TimeEntryRepository>,
        timesheet_repo: Arc<dyn TimesheetRepository>,
        leave_repo: Arc<dyn LeaveRepository>,
        mailer: Arc<Mailer>,
        app_url: String,
    ) -> Self {
        let presence_store = PresenceStore::new((*redis_pool).clone());

        Self {
            pool,
            redis_pool,
            profile_repo,
            client_repo,
            task_repo,
            otp_repo,
            time_entry_repo,
            timesheet_repo,
            leave_repo,
            presence_store,
            mailer,
            app_url,
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the client repository
    pub fn client_repo(&self) -> &dyn ClientRepository {
        self.client_repo.as_ref()
    }

    /// Get the task repository
    pub fn task_repo(&self) -> &dyn TaskRepository {
        self.task_repo.as_ref()
    }

    /// Get the OTP repository
    pub fn otp_repo(&self) -> &dyn OtpRepository {
        self.otp_repo.as_ref()
    }

    /// Get the time entry repository
    pub fn time_entry_repo(&self) -> &dyn TimeEntryRepository {
        self.time_entry_repo.as_ref()
    }

    /// Get the timesheet repository
    pub fn timesheet_repo(&self) -> &dyn TimesheetRepository {
        self.timesheet_repo.as_ref()
    }

    /// Get the leave repository
    pub fn leave_repo(&self) -> &dyn LeaveRepository {
        self.leave_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the presence store
    pub fn presence_store(&self) -> &PresenceStore {
        &self.presence_store
    }

    // === Email ===

    /// Get the mailer
    pub fn mailer(&self) -> &Mailer {
        self.mailer.as_ref()
    }

    /// Get the public base URL
    pub fn app_url(&self) -> &str {
        &self.app_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("app_url", &self.app_url)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    client_repo: Option<Arc<dyn ClientRepository>>,
    task_repo: Option<Arc<dyn TaskRepository>>,
    otp_repo: Option<Arc<dyn OtpRepository>>,
    time_entry_repo: Option<Arc<dyn TimeEntryRepository>>,
    timesheet_repo: Option<Arc<dyn TimesheetRepository>>,
    leave_repo: Option<Arc<dyn LeaveRepository>>,
    mailer: Option<Arc<Mailer>>,
    app_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn client_repo(mut self, repo: Arc<dyn ClientRepository>) -> Self {
        self.client_repo = Some(repo);
        self
    }

    pub fn task_repo(mut self, repo: Arc<dyn TaskRepository>) -> Self {
        self.task_repo = Some(repo);
        self
    }

    pub fn otp_repo(mut self, repo: Arc<dyn OtpRepository>) -> Self {
        self.otp_repo = Some(repo);
        self
    }

    pub fn time_entry_repo(mut self, repo: Arc<dyn TimeEntryRepository>) -> Self {
        self.time_entry_repo = Some(repo);
        self
    }

    pub fn timesheet_repo(mut self, repo: Arc<dyn TimesheetRepository>) -> Self {
        self.timesheet_repo = Some(repo);
        self
    }

    pub fn leave_repo(mut self, repo: Arc<dyn LeaveRepository>) -> Self {
        self.leave_repo = Some(repo);
        self
    }

    pub fn mailer(mut self, mailer: Arc<Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = Some(url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool.ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.profile_repo.ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.client_repo.ok_or_else(|| ServiceError::validation("client_repo is required"))?,
            self.task_repo.ok_or_else(|| ServiceError::validation("task_repo is required"))?,
            self.otp_repo.ok_or_else(|| ServiceError::validation("otp_repo is required"))?,
            self.time_entry_repo.ok_or_else(|| ServiceError::validation("time_entry_repo is required"))?,
            self.timesheet_repo.ok_or_else(|| ServiceError::validation("timesheet_repo is required"))?,
            self.leave_repo.ok_or_else(|| ServiceError::validation("leave_repo is required"))?,
            self.mailer.ok_or_else(|| ServiceError::validation("mailer is required"))?,
            self.app_url.ok_or_else(|| ServiceError::validation("app_url is required"))?,
        ))
    }
}
