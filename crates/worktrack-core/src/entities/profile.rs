//! Profile entity - an employee (or admin) account record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileRole {
    Admin,
    #[default]
    Employee,
}

impl ProfileRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Employee => "EMPLOYEE",
        }
    }
}

impl std::str::FromStr for ProfileRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "EMPLOYEE" => Ok(Self::Employee),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

/// Lifecycle status of a profile
///
/// New employee signups start in `PendingReview` and only become `Active`
/// through the onboarding approval flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStatus {
    #[default]
    PendingReview,
    Active,
    Rejected,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "PENDING_REVIEW",
            Self::Active => "ACTIVE",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for ProfileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_REVIEW" => Ok(Self::PendingReview),
            "ACTIVE" => Ok(Self::Active),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(format!("Invalid profile status: {s}")),
        }
    }
}

/// Profile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: ProfileRole,
    pub status: ProfileStatus,
    /// Human-facing employee code ("EMP" + 4 digits), assigned at approval
    pub employee_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile in the status appropriate for its role:
    /// admins are active immediately, employees await review.
    pub fn new(full_name: String, email: String, phone: Option<String>, role: ProfileRole) -> Self {
        let status = match role {
            ProfileRole::Admin => ProfileStatus::Active,
            ProfileRole::Employee => ProfileStatus::PendingReview,
        };
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            phone,
            role,
            status,
            employee_code: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the profile may use the system
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ProfileStatus::Active
    }

    /// Check if the profile is waiting in the onboarding queue
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ProfileStatus::PendingReview
    }
}

/// Generate a random employee code of the form `EMP1000`-`EMP9999`
pub fn generate_employee_code() -> String {
    use rand::Rng;

    let n: u32 = rand::thread_rng().gen_range(1000..10_000);
    format!("EMP{n}")
}
