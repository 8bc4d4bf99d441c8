//! Profile entity <-> model mapper

use worktrack_core::entities::{Profile, ProfileRole, ProfileStatus};

use crate::models::ProfileModel;

/// Convert database role string to ProfileRole
fn parse_role(s: &str) -> ProfileRole {
    s.parse().unwrap_or(ProfileRole::Employee)
}

/// Convert database status string to ProfileStatus
fn parse_status(s: &str) -> ProfileStatus {
    s.parse().unwrap_or(ProfileStatus::PendingReview)
}

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            role: parse_role(&model.role),
            status: parse_status(&model.status),
            employee_code: model.employee_code,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strings_fall_back() {
        assert_eq!(parse_role("CONTRACTOR"), ProfileRole::Employee);
        assert_eq!(parse_status("LIMBO"), ProfileStatus::PendingReview);
        assert_eq!(parse_status("ACTIVE"), ProfileStatus::Active);
    }
}
