//! Presence service
//!
//! Bridges heartbeat requests into the Redis presence store and produces the
//! live-now feed for the admin dashboard.

use tracing::instrument;

use worktrack_cache::PresenceData;
use worktrack_common::AppError;

use crate::dto::{HeartbeatRequest, PresenceResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Presence service
pub struct PresenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceService<'a> {
    /// Create a new PresenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a heartbeat
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn heartbeat(&self, request: HeartbeatRequest) -> ServiceResult<()> {
        let mut presence = PresenceData::new(request.user_id, request.active_task_id);
        presence.tab_visible = request.tab_visible;
        presence.device = request.device;

        self.ctx
            .presence_store()
            .set_presence(&presence)
            .await
            .map_err(|e| ServiceError::App(AppError::Cache(e.to_string())))?;

        Ok(())
    }

    /// Everyone currently live, most recent heartbeat first
    #[instrument(skip(self))]
    pub async fn now(&self) -> ServiceResult<Vec<PresenceResponse>> {
        let mut presences = self
            .ctx
            .presence_store()
            .list_all()
            .await
            .map_err(|e| ServiceError::App(AppError::Cache(e.to_string())))?;

        presences.sort_by(|a, b| b.last_heartbeat.cmp(&a.last_heartbeat));

        Ok(presences.iter().map(PresenceResponse::from).collect())
    }
}
