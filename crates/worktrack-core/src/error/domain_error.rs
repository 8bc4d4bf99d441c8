//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Which OTP issuance window was breached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitWindow {
    /// One issuance per 10 minutes per task
    Burst,
    /// Five issuances per 24 hours per task
    Daily,
}

impl std::fmt::Display for RateLimitWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Burst => write!(f, "a code was generated recently; wait before requesting another"),
            Self::Daily => write!(f, "too many codes requested for this task in the last 24 hours"),
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Client not found: {0}")]
    ClientNotFound(Uuid),

    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Timesheet not found: {0}")]
    TimesheetNotFound(Uuid),

    #[error("Leave request not found: {0}")]
    LeaveRequestNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Profile is not awaiting review")]
    ProfileNotPending,

    // =========================================================================
    // Rate Limiting
    // =========================================================================
    #[error("OTP rate limited: {0}")]
    OtpRateLimited(RateLimitWindow),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::TaskNotFound(_) => "UNKNOWN_TASK",
            Self::ClientNotFound(_) => "UNKNOWN_CLIENT",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::TimesheetNotFound(_) => "UNKNOWN_TIMESHEET",
            Self::LeaveRequestNotFound(_) => "UNKNOWN_LEAVE_REQUEST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ProfileNotPending => "PROFILE_NOT_PENDING",

            // Rate limiting
            Self::OtpRateLimited(_) => "OTP_RATE_LIMITED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound(_)
                | Self::ClientNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::TimesheetNotFound(_)
                | Self::LeaveRequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidEmail)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::ProfileNotPending)
    }

    /// Check if this is an issuance rate-limit breach
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::OtpRateLimited(_))
    }
}
