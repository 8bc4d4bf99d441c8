//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, SMTP_* (delivery may
//!   fail against a dummy relay - that is fine, it is best-effort)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Onboarding Tests
// ============================================================================

#[tokio::test]
async fn test_signup_lands_in_queue() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    let signup: SignupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(signup.status, "PENDING_REVIEW");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    server.post("/api/v1/signup", &request).await.unwrap();
    let response = server.post("/api/v1/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_approve_applicant_assigns_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    let signup: SignupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty(&format!("/api/v1/admin/onboarding/{}/approve", signup.id))
        .await
        .unwrap();
    let approved: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(approved["employee_code"]
        .as_str()
        .unwrap()
        .starts_with("EMP"));
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_clients() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateClientRequest::unique();

    let response = server.post("/api/v1/admin/clients", &request).await.unwrap();
    let created: ClientResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, request.name);

    let response = server.get("/api/v1/admin/clients").await.unwrap();
    let clients: Vec<ClientResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(clients.iter().any(|c| c.id == created.id));
}

// ============================================================================
// Task & OTP Tests
// ============================================================================

#[tokio::test]
async fn test_create_task_and_wrong_code_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Create a client so the OTP email has a recipient
    let client_req = CreateClientRequest::unique();
    let response = server.post("/api/v1/admin/clients", &client_req).await.unwrap();
    let client: ClientResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Create a task for that client
    let task_req = CreateTaskRequest::for_client(&client.id);
    let response = server.post("/api/v1/admin/tasks", &task_req).await.unwrap();
    let task: TaskResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(task.status, "PENDING");

    // Issue a verification code (email delivery is best-effort)
    let response = server
        .post_empty(&format!("/api/v1/admin/tasks/{}/otp", task.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A second issuance inside the burst window is refused
    let response = server
        .post_empty(&format!("/api/v1/admin/tasks/{}/otp", task.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();

    // A wrong code does not complete the task
    let response = server
        .post(
            &format!("/api/v1/employee/tasks/{}/complete", task.id),
            &CompleteTaskRequest {
                otp: "000000".to_string(),
            },
        )
        .await
        .unwrap();
    let completion: CompleteTaskResponse =
        assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    // The plaintext is random; in the 1-in-a-million collision case this
    // assertion is the one that flags it
    assert_eq!(completion.result, "INVALID");
}

#[tokio::test]
async fn test_complete_task_without_code_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let task_req = CreateTaskRequest::unique();
    let response = server.post("/api/v1/admin/tasks", &task_req).await.unwrap();
    let task: TaskResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/employee/tasks/{}/complete", task.id),
            &CompleteTaskRequest {
                otp: "123456".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Attendance & Leave Tests
// ============================================================================

#[tokio::test]
async fn test_clock_in_and_out() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = uuid::Uuid::new_v4().to_string();

    let response = server
        .post(
            "/api/v1/employee/time/clock-in",
            &ClockRequest {
                user_id: user_id.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post("/api/v1/employee/time/clock-out", &ClockRequest { user_id })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_unknown_clock_action_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/employee/time/nap",
            &ClockRequest {
                user_id: uuid::Uuid::new_v4().to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_file_leave_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/employee/leave",
            &CreateLeaveRequest {
                user_id: uuid::Uuid::new_v4().to_string(),
                leave_type: "ANNUAL".to_string(),
                start_date: "2025-09-01".to_string(),
                end_date: "2025-09-05".to_string(),
                reason: None,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}
