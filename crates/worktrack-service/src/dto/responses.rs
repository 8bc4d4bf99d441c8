//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use worktrack_cache::PresenceStatus;
use worktrack_core::entities::{
    LeaveStatus, LeaveType, OtpOutcome, ProfileRole, ProfileStatus, TaskPriority, TaskStatus,
    TimesheetStatus,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Offset pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ============================================================================
// Task Responses
// ============================================================================

/// Task response, optionally enriched with display names
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub client_id: Option<Uuid>,
    pub assignee: Option<Uuid>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub estimated_hours: f64,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
}

/// One page of tasks
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
    pub meta: PageMeta,
}

/// Acknowledgement of an issued verification code.
/// The plaintext code is delivered out of band, never via the API.
#[derive(Debug, Serialize)]
pub struct OtpIssuedResponse {
    pub task_id: Uuid,
    pub ttl_hours: i64,
    pub expires_at: DateTime<Utc>,
}

/// Result of a completion attempt
#[derive(Debug, Serialize)]
pub struct CompleteTaskResponse {
    pub result: OtpOutcome,
    pub message: String,
}

impl CompleteTaskResponse {
    /// Map each verification outcome to its distinct user-facing message
    pub fn from_outcome(outcome: OtpOutcome) -> Self {
        let message = match outcome {
            OtpOutcome::Success => "Task completed".to_string(),
            OtpOutcome::NotFound => "No verification code has been issued for this task".to_string(),
            OtpOutcome::Expired => "Verification code expired; request a new one".to_string(),
            OtpOutcome::MaxAttemptsExceeded => {
                "Too many attempts; request a new verification code".to_string()
            }
            OtpOutcome::Invalid => "Invalid verification code".to_string(),
        };
        Self {
            result: outcome,
            message,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: ProfileRole,
    pub status: ProfileStatus,
    pub employee_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Signup acknowledgement
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: Uuid,
    pub status: ProfileStatus,
}

/// Onboarding approval result
#[derive(Debug, Serialize)]
pub struct ApproveApplicantResponse {
    pub id: Uuid,
    pub employee_code: String,
}

/// Employee detail: profile plus recent activity
#[derive(Debug, Serialize)]
pub struct EmployeeDetailResponse {
    pub profile: ProfileResponse,
    pub timesheets: Vec<TimesheetResponse>,
    pub leaves: Vec<LeaveResponse>,
}

// ============================================================================
// Client Responses
// ============================================================================

/// Client response
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Time & Attendance Responses
// ============================================================================

/// Time entry response
#[derive(Debug, Serialize)]
pub struct TimeEntryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_break: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Timesheet response
#[derive(Debug, Serialize)]
pub struct TimesheetResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
    pub status: TimesheetStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Leave Responses
// ============================================================================

/// Leave request response
#[derive(Debug, Serialize)]
pub struct LeaveResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Presence Responses
// ============================================================================

/// Live presence entry
#[derive(Debug, Serialize)]
pub struct PresenceResponse {
    pub user_id: Uuid,
    pub status: PresenceStatus,
    pub last_heartbeat: DateTime<Utc>,
    pub active_task_id: Option<Uuid>,
    pub device: Option<String>,
}

// ============================================================================
// Audit Responses
// ============================================================================

/// One event in a user's merged activity feed
#[derive(Debug, Serialize)]
pub struct AuditEventResponse {
    pub event_type: &'static str,
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub payload: Value,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    /// The process is up
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    /// Build from dependency check results
    #[must_use]
    pub fn ready(database: bool, redis: bool) -> Self {
        Self {
            status: if database && redis { "ready" } else { "degraded" },
            checks: HealthChecks { database, redis },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_task_messages_are_distinct() {
        let outcomes = [
            OtpOutcome::Success,
            OtpOutcome::NotFound,
            OtpOutcome::Expired,
            OtpOutcome::MaxAttemptsExceeded,
            OtpOutcome::Invalid,
        ];
        let messages: Vec<String> = outcomes
            .iter()
            .map(|o| CompleteTaskResponse::from_outcome(*o).message)
            .collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_task_response_omits_unset_names() {
        let json = serde_json::to_string(&TaskResponse {
            id: Uuid::nil(),
            title: "t".to_string(),
            description: None,
            client_id: None,
            assignee: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            estimated_hours: 0.0,
            due_date: None,
            completed_at: None,
            created_at: Utc::now(),
            client_name: None,
            assignee_name: None,
        })
        .unwrap();
        assert!(!json.contains("client_name"));
        assert!(json.contains("\"status\":\"PENDING\""));
    }
}
