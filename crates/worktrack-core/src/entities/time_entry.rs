//! Time entry entity - one work or break interval for an employee

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Time entry entity
///
/// An entry with `end_time = None` is "open"; clocking out or ending a break
/// closes the latest open entry for the user. Entries created by starting a
/// task carry that task's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_break: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimeEntry {
    /// Open a work entry starting now
    pub fn open(user_id: Uuid, task_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            task_id,
            start_time: now,
            end_time: None,
            is_break: false,
            notes: None,
            created_at: now,
        }
    }

    /// Open a break entry starting now
    pub fn open_break(user_id: Uuid) -> Self {
        Self {
            is_break: true,
            ..Self::open(user_id, None)
        }
    }

    /// Check if the entry is still running
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_entry() {
        let entry = TimeEntry::open(Uuid::new_v4(), None);
        assert!(entry.is_open());
        assert!(!entry.is_break);
    }

    #[test]
    fn test_open_break() {
        let entry = TimeEntry::open_break(Uuid::new_v4());
        assert!(entry.is_open());
        assert!(entry.is_break);
        assert!(entry.task_id.is_none());
    }
}
