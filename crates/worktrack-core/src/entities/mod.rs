//! Domain entities - core business objects

mod client;
mod leave;
mod otp;
mod profile;
mod task;
mod time_entry;
mod timesheet;

pub use client::Client;
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use otp::{
    generate_otp_code, OtpOutcome, OtpRecord, OTP_BURST_WINDOW_MINUTES, OTP_CODE_LENGTH,
    OTP_DAILY_CAP, OTP_DAILY_WINDOW_HOURS, OTP_DEFAULT_TTL_HOURS, OTP_MAX_ATTEMPTS,
};
pub use profile::{generate_employee_code, Profile, ProfileRole, ProfileStatus};
pub use task::{Task, TaskPriority, TaskStatus};
pub use time_entry::TimeEntry;
pub use timesheet::{Timesheet, TimesheetStatus};
