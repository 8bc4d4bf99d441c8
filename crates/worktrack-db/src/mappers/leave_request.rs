//! Leave request entity <-> model mapper

use worktrack_core::entities::{LeaveRequest, LeaveStatus, LeaveType};

use crate::models::LeaveRequestModel;

/// Convert database leave type string to LeaveType
fn parse_leave_type(s: &str) -> LeaveType {
    s.parse().unwrap_or(LeaveType::Other)
}

/// Convert database status string to LeaveStatus
fn parse_status(s: &str) -> LeaveStatus {
    s.parse().unwrap_or(LeaveStatus::Pending)
}

/// Convert LeaveRequestModel to LeaveRequest entity
impl From<LeaveRequestModel> for LeaveRequest {
    fn from(model: LeaveRequestModel) -> Self {
        LeaveRequest {
            id: model.id,
            user_id: model.user_id,
            leave_type: parse_leave_type(&model.leave_type),
            start_date: model.start_date,
            end_date: model.end_date,
            reason: model.reason,
            status: parse_status(&model.status),
            decided_at: model.decided_at,
            created_at: model.created_at,
        }
    }
}
