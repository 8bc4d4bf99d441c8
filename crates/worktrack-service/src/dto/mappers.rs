//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::Utc;

use worktrack_cache::PresenceData;
use worktrack_core::entities::{Client, LeaveRequest, Profile, Task, TimeEntry, Timesheet};

use super::responses::{
    ClientResponse, LeaveResponse, PresenceResponse, ProfileResponse, TaskResponse,
    TimeEntryResponse, TimesheetResponse,
};

// ============================================================================
// Task Mappers
// ============================================================================

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            client_id: task.client_id,
            assignee: task.assignee,
            status: task.status,
            priority: task.priority,
            estimated_hours: task.estimated_hours,
            due_date: task.due_date,
            completed_at: task.completed_at,
            created_at: task.created_at,
            client_name: None,
            assignee_name: None,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

impl TaskResponse {
    /// Attach display names resolved from related records
    #[must_use]
    pub fn with_names(mut self, client_name: Option<String>, assignee_name: Option<String>) -> Self {
        self.client_name = client_name;
        self.assignee_name = assignee_name;
        self
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            role: profile.role,
            status: profile.status,
            employee_code: profile.employee_code.clone(),
            created_at: profile.created_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// Client Mappers
// ============================================================================

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            contact_email: client.contact_email.clone(),
            contact_phone: client.contact_phone.clone(),
            created_at: client.created_at,
        }
    }
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self::from(&client)
    }
}

// ============================================================================
// Time & Attendance Mappers
// ============================================================================

impl From<&TimeEntry> for TimeEntryResponse {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            task_id: entry.task_id,
            start_time: entry.start_time,
            end_time: entry.end_time,
            is_break: entry.is_break,
            notes: entry.notes.clone(),
            created_at: entry.created_at,
        }
    }
}

impl From<TimeEntry> for TimeEntryResponse {
    fn from(entry: TimeEntry) -> Self {
        Self::from(&entry)
    }
}

impl From<&Timesheet> for TimesheetResponse {
    fn from(sheet: &Timesheet) -> Self {
        Self {
            id: sheet.id,
            user_id: sheet.user_id,
            week_start: sheet.week_start,
            week_end: sheet.week_end,
            total_hours: sheet.total_hours,
            status: sheet.status,
            notes: sheet.notes.clone(),
            created_at: sheet.created_at,
        }
    }
}

impl From<Timesheet> for TimesheetResponse {
    fn from(sheet: Timesheet) -> Self {
        Self::from(&sheet)
    }
}

// ============================================================================
// Leave Mappers
// ============================================================================

impl From<&LeaveRequest> for LeaveResponse {
    fn from(request: &LeaveRequest) -> Self {
        Self {
            id: request.id,
            user_id: request.user_id,
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason.clone(),
            status: request.status,
            decided_at: request.decided_at,
            created_at: request.created_at,
        }
    }
}

impl From<LeaveRequest> for LeaveResponse {
    fn from(request: LeaveRequest) -> Self {
        Self::from(&request)
    }
}

// ============================================================================
// Presence Mappers
// ============================================================================

impl From<&PresenceData> for PresenceResponse {
    fn from(data: &PresenceData) -> Self {
        Self {
            user_id: data.user_id,
            status: data.status(Utc::now()),
            last_heartbeat: data.last_heartbeat,
            active_task_id: data.active_task_id,
            device: data.device.clone(),
        }
    }
}
