//! Employee presence storage in Redis.
//!
//! Each heartbeat refreshes a TTL-expiring key; employees who stop sending
//! heartbeats age out of the live view without any cleanup pass.

use crate::pool::{RedisPool, RedisResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key prefix for employee presence
const PRESENCE_PREFIX: &str = "presence:";

/// Presence TTL (2 minutes - refreshed by heartbeat)
const PRESENCE_TTL: u64 = 120;

/// Heartbeat age beyond which an employee counts as away, in seconds
const AWAY_AFTER_SECS: i64 = 60;

/// Derived presence status shown on the live dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresenceStatus {
    /// Heartbeating with an active task
    Working,
    /// Heartbeating, no active task
    Online,
    /// Heartbeat stale or tab hidden
    Away,
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Working => write!(f, "WORKING"),
            Self::Online => write!(f, "ONLINE"),
            Self::Away => write!(f, "AWAY"),
        }
    }
}

/// Employee presence data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceData {
    /// Employee profile ID
    pub user_id: Uuid,
    /// Last heartbeat timestamp
    pub last_heartbeat: DateTime<Utc>,
    /// Task the employee is currently working on, if any
    pub active_task_id: Option<Uuid>,
    /// Whether the dashboard tab is visible
    pub tab_visible: bool,
    /// Device descriptor reported by the frontend
    pub device: Option<String>,
}

impl PresenceData {
    /// Create presence data stamped with the current instant
    #[must_use]
    pub fn new(user_id: Uuid, active_task_id: Option<Uuid>) -> Self {
        Self {
            user_id,
            last_heartbeat: Utc::now(),
            active_task_id,
            tab_visible: true,
            device: None,
        }
    }

    /// Derive the dashboard status from heartbeat age and activity
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> PresenceStatus {
        let age = (now - self.last_heartbeat).num_seconds();
        if age > AWAY_AFTER_SECS || !self.tab_visible {
            PresenceStatus::Away
        } else if self.active_task_id.is_some() {
            PresenceStatus::Working
        } else {
            PresenceStatus::Online
        }
    }
}

/// Employee presence store
#[derive(Clone)]
pub struct PresenceStore {
    pool: RedisPool,
}

impl PresenceStore {
    /// Create a new presence store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Generate Redis key for employee presence
    fn presence_key(user_id: Uuid) -> String {
        format!("{PRESENCE_PREFIX}{user_id}")
    }

    /// Record a heartbeat, replacing any previous presence for the employee
    pub async fn set_presence(&self, presence: &PresenceData) -> RedisResult<()> {
        let key = Self::presence_key(presence.user_id);
        self.pool.set(&key, presence, Some(PRESENCE_TTL)).await?;

        tracing::debug!(
            user_id = %presence.user_id,
            active_task = ?presence.active_task_id,
            "Recorded presence heartbeat"
        );

        Ok(())
    }

    /// Get one employee's presence
    pub async fn get_presence(&self, user_id: Uuid) -> RedisResult<Option<PresenceData>> {
        let key = Self::presence_key(user_id);
        self.pool.get_value(&key).await
    }

    /// Remove an employee's presence
    pub async fn remove_presence(&self, user_id: Uuid) -> RedisResult<bool> {
        let key = Self::presence_key(user_id);
        self.pool.delete(&key).await
    }

    /// All employees currently present (keys that have not aged out)
    pub async fn list_all(&self) -> RedisResult<Vec<PresenceData>> {
        let pattern = format!("{PRESENCE_PREFIX}*");
        let keys = self.pool.scan_keys(&pattern, 100).await?;

        let mut presences = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(data) = self.pool.get_value::<PresenceData>(&key).await? {
                presences.push(data);
            }
        }

        Ok(presences)
    }
}
