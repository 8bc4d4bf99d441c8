//! Task entity <-> model mapper

use worktrack_core::entities::{Task, TaskPriority, TaskStatus};

use crate::models::TaskModel;

/// Convert database status string to TaskStatus
fn parse_status(s: &str) -> TaskStatus {
    s.parse().unwrap_or(TaskStatus::Pending)
}

/// Convert database priority string to TaskPriority
fn parse_priority(s: &str) -> TaskPriority {
    s.parse().unwrap_or(TaskPriority::Medium)
}

/// Convert TaskModel to Task entity
impl From<TaskModel> for Task {
    fn from(model: TaskModel) -> Self {
        Task {
            id: model.id,
            title: model.title,
            description: model.description,
            client_id: model.client_id,
            assignee: model.assignee,
            status: parse_status(&model.status),
            priority: parse_priority(&model.priority),
            estimated_hours: model.estimated_hours,
            due_date: model.due_date,
            completed_at: model.completed_at,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strings_fall_back() {
        assert_eq!(parse_status("ARCHIVED"), TaskStatus::Pending);
        assert_eq!(parse_status("IN_PROGRESS"), TaskStatus::InProgress);
        assert_eq!(parse_priority("URGENT"), TaskPriority::Medium);
    }
}
