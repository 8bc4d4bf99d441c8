//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1. Admin and
//! employee surfaces are split by path prefix; authentication of staff users
//! sits in front of this service and is not handled here.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    attendance, audit, clients, employees, health, leave, onboarding, presence, tasks, timesheets,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(onboarding_routes())
        .merge(admin_routes())
        .merge(employee_routes())
        .merge(presence_routes())
}

/// Public onboarding routes
fn onboarding_routes() -> Router<AppState> {
    Router::new().route("/signup", post(onboarding::signup))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Clients
        .route("/admin/clients", get(clients::list_clients))
        .route("/admin/clients", post(clients::create_client))
        .route("/admin/clients/:id", patch(clients::update_client))
        .route("/admin/clients/:id", delete(clients::delete_client))
        // Employees
        .route("/admin/employees", get(employees::list_employees))
        .route("/admin/employees/:id", get(employees::employee_detail))
        // Onboarding queue
        .route("/admin/onboarding", get(onboarding::onboarding_queue))
        .route("/admin/onboarding/:id/approve", post(onboarding::approve_applicant))
        .route("/admin/onboarding/:id/reject", post(onboarding::reject_applicant))
        // Tasks
        .route("/admin/tasks", get(tasks::list_tasks))
        .route("/admin/tasks", post(tasks::create_task))
        .route("/admin/tasks/:id", patch(tasks::update_task))
        .route("/admin/tasks/:id", delete(tasks::delete_task))
        .route("/admin/tasks/:id/otp", post(tasks::issue_task_otp))
        // Timesheets
        .route("/admin/timesheets", get(timesheets::list_timesheets))
        .route("/admin/timesheets/:id/approve", post(timesheets::approve_timesheet))
        .route("/admin/timesheets/:id/return", post(timesheets::return_timesheet))
        // Leave review
        .route("/admin/leave/:id/approve", post(leave::approve_leave))
        // Time entries
        .route("/admin/time-entries", get(attendance::list_time_entries))
        // Audit feed
        .route("/admin/audit", get(audit::user_audit))
}

/// Employee routes
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employee/tasks/:id/start", post(tasks::start_task))
        .route("/employee/tasks/:id/complete", post(tasks::complete_task))
        .route("/employee/time/:action", post(attendance::clock_action))
        .route("/employee/timesheets/week", get(timesheets::week_timesheets))
        .route("/employee/leave", post(leave::create_leave))
}

/// Presence routes
fn presence_routes() -> Router<AppState> {
    Router::new()
        .route("/presence/heartbeat", post(presence::heartbeat))
        .route("/presence/now", get(presence::presence_now))
}
