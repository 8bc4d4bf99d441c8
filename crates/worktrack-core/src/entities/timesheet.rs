//! Timesheet entity - a weekly hours summary awaiting approval

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timesheet review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimesheetStatus {
    #[default]
    Submitted,
    Approved,
    Returned,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Returned => "RETURNED",
        }
    }
}

impl std::str::FromStr for TimesheetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(Self::Submitted),
            "APPROVED" => Ok(Self::Approved),
            "RETURNED" => Ok(Self::Returned),
            _ => Err(format!("Invalid timesheet status: {s}")),
        }
    }
}

/// Timesheet entity
#[derive(Debug, Clone, PartialEq)]
pub struct Timesheet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
    pub status: TimesheetStatus,
    /// Reviewer notes, set when a sheet is returned for rework
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Timesheet {
    /// Check if the sheet has been approved
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == TimesheetStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            TimesheetStatus::Submitted,
            TimesheetStatus::Approved,
            TimesheetStatus::Returned,
        ] {
            assert_eq!(status.as_str().parse::<TimesheetStatus>().unwrap(), status);
        }
        assert!("DRAFT".parse::<TimesheetStatus>().is_err());
    }
}
