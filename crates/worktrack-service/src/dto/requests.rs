//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; the validated ones also derive
//! `Validate` for input checking at the extractor layer.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use worktrack_core::entities::{LeaveType, ProfileRole, TaskPriority, TaskStatus};

// ============================================================================
// Task Requests
// ============================================================================

/// Create task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub client_id: Option<Uuid>,

    pub assignee: Option<Uuid>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub estimated_hours: f64,

    pub due_date: Option<NaiveDate>,
}

/// Update task request; absent fields are left untouched
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub client_id: Option<Uuid>,

    pub assignee: Option<Uuid>,

    pub status: Option<TaskStatus>,

    pub priority: Option<TaskPriority>,

    pub estimated_hours: Option<f64>,

    pub due_date: Option<NaiveDate>,
}

/// Request a verification code for a task
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct IssueOtpRequest {
    /// Recipient override; defaults to the task's client contact email
    #[validate(email(message = "Invalid email format"))]
    pub client_email: Option<String>,

    /// Code lifetime; defaults to 24 hours
    #[validate(range(min = 1, max = 168, message = "TTL must be 1-168 hours"))]
    pub ttl_hours: Option<i64>,
}

/// Submit a verification code to complete a task
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompleteTaskRequest {
    #[validate(length(equal = 6, message = "Code must be exactly 6 characters"))]
    pub otp: String,
}

// ============================================================================
// Onboarding Requests
// ============================================================================

/// Signup request - creates a profile awaiting admin review
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "Full name must be 1-200 characters"))]
    pub full_name: String,

    pub phone: Option<String>,

    #[serde(default)]
    pub role: ProfileRole,
}

/// Reject an onboarding applicant
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RejectApplicantRequest {
    pub reason: Option<String>,
}

// ============================================================================
// Client Requests
// ============================================================================

/// Create client request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,
}

/// Update client request; absent fields are left untouched
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Clock action request body
#[derive(Debug, Clone, Deserialize)]
pub struct ClockRequest {
    pub user_id: Uuid,
}

// ============================================================================
// Leave Requests
// ============================================================================

/// Create leave request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLeaveRequest {
    pub user_id: Uuid,

    pub leave_type: LeaveType,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(length(max = 2000, message = "Reason must be at most 2000 characters"))]
    pub reason: Option<String>,
}

// ============================================================================
// Timesheet Requests
// ============================================================================

/// Return a timesheet for rework
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReturnTimesheetRequest {
    pub reason: Option<String>,
}

// ============================================================================
// Presence Requests
// ============================================================================

/// Presence heartbeat
#[derive(Debug, Clone, Deserialize)]
pub struct HeartbeatRequest {
    pub user_id: Uuid,

    pub active_task_id: Option<Uuid>,

    #[serde(default = "default_tab_visible")]
    pub tab_visible: bool,

    pub device: Option<String>,
}

fn default_tab_visible() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_task_request_length() {
        let request = CompleteTaskRequest {
            otp: "123456".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = CompleteTaskRequest {
            otp: "12345".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_issue_otp_request_bounds() {
        let request = IssueOtpRequest {
            client_email: Some("client@example.com".to_string()),
            ttl_hours: Some(48),
        };
        assert!(request.validate().is_ok());

        let request = IssueOtpRequest {
            client_email: Some("not-an-email".to_string()),
            ttl_hours: None,
        };
        assert!(request.validate().is_err());

        let request = IssueOtpRequest {
            client_email: None,
            ttl_hours: Some(0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_heartbeat_defaults_tab_visible() {
        let request: HeartbeatRequest =
            serde_json::from_str(&format!(r#"{{"user_id":"{}"}}"#, Uuid::new_v4())).unwrap();
        assert!(request.tab_visible);
    }
}
