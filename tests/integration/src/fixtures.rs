//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("hire{suffix}@example.com"),
            full_name: format!("Test Hire {suffix}"),
            phone: None,
            role: "EMPLOYEE".to_string(),
        }
    }
}

/// Signup response
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub status: String,
}

/// Create client request
#[derive(Debug, Serialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl CreateClientRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Client {suffix}"),
            contact_email: Some(format!("client{suffix}@example.com")),
            contact_phone: None,
        }
    }
}

/// Client response
#[derive(Debug, Deserialize)]
pub struct ClientResponse {
    pub id: String,
    pub name: String,
    pub contact_email: Option<String>,
}

/// Create task request
#[derive(Debug, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub client_id: Option<String>,
    pub priority: String,
}

impl CreateTaskRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Task {suffix}"),
            description: Some("Created by integration tests".to_string()),
            client_id: None,
            priority: "MEDIUM".to_string(),
        }
    }

    pub fn for_client(client_id: &str) -> Self {
        Self {
            client_id: Some(client_id.to_string()),
            ..Self::unique()
        }
    }
}

/// Task response
#[derive(Debug, Deserialize)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub status: String,
}

/// Complete task request
#[derive(Debug, Serialize)]
pub struct CompleteTaskRequest {
    pub otp: String,
}

/// Completion attempt response
#[derive(Debug, Deserialize)]
pub struct CompleteTaskResponse {
    pub result: String,
    pub message: String,
}

/// Leave request body
#[derive(Debug, Serialize)]
pub struct CreateLeaveRequest {
    pub user_id: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: Option<String>,
}

/// Clock action body
#[derive(Debug, Serialize)]
pub struct ClockRequest {
    pub user_id: String,
}
