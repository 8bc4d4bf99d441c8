//! Client handlers

use axum::{extract::State, Json};
use worktrack_service::{ClientResponse, ClientService, CreateClientRequest, UpdateClientRequest};

use crate::extractors::{UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all clients
///
/// GET /admin/clients
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<ClientResponse>>> {
    let service = ClientService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Create a client
///
/// POST /admin/clients
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateClientRequest>,
) -> ApiResult<Created<Json<ClientResponse>>> {
    let service = ClientService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Partially update a client
///
/// PATCH /admin/clients/:id
pub async fn update_client(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<UpdateClientRequest>,
) -> ApiResult<Json<ClientResponse>> {
    let service = ClientService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Delete a client
///
/// DELETE /admin/clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> ApiResult<NoContent> {
    let service = ClientService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
