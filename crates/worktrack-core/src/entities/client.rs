//! Client entity - a customer whose tasks employees work on

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Client entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Create a new client
    pub fn new(name: String, contact_email: Option<String>, contact_phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            contact_email,
            contact_phone,
            created_at: Utc::now(),
        }
    }
}
