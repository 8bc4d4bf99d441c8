//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ClockRequest, CompleteTaskRequest, CreateClientRequest, CreateLeaveRequest,
    CreateTaskRequest, HeartbeatRequest, IssueOtpRequest, RejectApplicantRequest,
    ReturnTimesheetRequest, SignupRequest, UpdateClientRequest, UpdateTaskRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApproveApplicantResponse, AuditEventResponse, ClientResponse, CompleteTaskResponse,
    EmployeeDetailResponse, HealthChecks, HealthResponse, LeaveResponse, OtpIssuedResponse,
    PageMeta, PresenceResponse, ProfileResponse, ReadinessResponse, SignupResponse,
    TaskListResponse, TaskResponse, TimeEntryResponse, TimesheetResponse,
};
