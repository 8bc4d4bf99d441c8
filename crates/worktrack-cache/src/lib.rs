//! # worktrack-cache
//!
//! Redis caching layer for employee presence.
//!
//! Presence is ephemeral by definition: heartbeats land in TTL-expiring keys
//! and employees who stop sending them simply age out. Nothing here is ever
//! persisted to the database.

pub mod pool;
pub mod presence;

// Re-export pool types
pub use pool::{create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};
pub use presence::{PresenceData, PresenceStatus, PresenceStore};
