//! Employee presence tracking

mod store;

pub use store::{PresenceData, PresenceStatus, PresenceStore};
