//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use uuid::Uuid;
use worktrack_core::error::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "task not found" error
pub fn task_not_found(id: Uuid) -> DomainError {
    DomainError::TaskNotFound(id)
}

/// Create a "client not found" error
pub fn client_not_found(id: Uuid) -> DomainError {
    DomainError::ClientNotFound(id)
}

/// Create a "profile not found" error
pub fn profile_not_found(id: Uuid) -> DomainError {
    DomainError::ProfileNotFound(id)
}

/// Create a "timesheet not found" error
pub fn timesheet_not_found(id: Uuid) -> DomainError {
    DomainError::TimesheetNotFound(id)
}

/// Create a "leave request not found" error
pub fn leave_request_not_found(id: Uuid) -> DomainError {
    DomainError::LeaveRequestNotFound(id)
}
