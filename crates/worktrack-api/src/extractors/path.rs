//! Path parameter extractors
//!
//! Type-safe extraction of UUID path parameters with a consistent 400 on
//! malformed input.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// Extract a single UUID from the `:id` path parameter
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = raw
            .parse::<Uuid>()
            .map_err(|_| ApiError::invalid_path("Invalid UUID format"))?;

        Ok(UuidPath(id))
    }
}
