//! # worktrack-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface for handlers
pub use dto::*;
pub use services::{
    AttendanceService, AuditService, ClientService, ClockAction, EmployeeService, IssuedOtp,
    LeaveService, OnboardingService, OtpService, PresenceService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TaskService, TimesheetService,
};
