//! Time entry entity <-> model mapper

use worktrack_core::entities::TimeEntry;

use crate::models::TimeEntryModel;

/// Convert TimeEntryModel to TimeEntry entity
impl From<TimeEntryModel> for TimeEntry {
    fn from(model: TimeEntryModel) -> Self {
        TimeEntry {
            id: model.id,
            user_id: model.user_id,
            task_id: model.task_id,
            start_time: model.start_time,
            end_time: model.end_time,
            is_break: model.is_break,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}
