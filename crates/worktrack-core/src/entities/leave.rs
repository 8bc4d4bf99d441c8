//! Leave request entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of requested leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
    Other,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "ANNUAL",
            Self::Sick => "SICK",
            Self::Unpaid => "UNPAID",
            Self::Other => "OTHER",
        }
    }
}

impl std::str::FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANNUAL" => Ok(Self::Annual),
            "SICK" => Ok(Self::Sick),
            "UNPAID" => Ok(Self::Unpaid),
            "OTHER" => Ok(Self::Other),
            _ => Err(format!("Invalid leave type: {s}")),
        }
    }
}

/// Review status of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(format!("Invalid leave status: {s}")),
        }
    }
}

/// Leave request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Create a new pending request
    pub fn new(
        user_id: Uuid,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            leave_type,
            start_date,
            end_date,
            reason,
            status: LeaveStatus::Pending,
            decided_at: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_pending() {
        let req = LeaveRequest::new(
            Uuid::new_v4(),
            LeaveType::Annual,
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
            None,
        );
        assert_eq!(req.status, LeaveStatus::Pending);
        assert!(req.decided_at.is_none());
    }

    #[test]
    fn test_type_round_trip() {
        for ty in [LeaveType::Annual, LeaveType::Sick, LeaveType::Unpaid, LeaveType::Other] {
            assert_eq!(ty.as_str().parse::<LeaveType>().unwrap(), ty);
        }
        assert!("HOLIDAY".parse::<LeaveType>().is_err());
    }
}
