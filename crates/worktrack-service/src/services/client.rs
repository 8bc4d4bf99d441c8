//! Client service

use tracing::{info, instrument};
use uuid::Uuid;

use worktrack_core::entities::Client;
use worktrack_core::traits::ClientChanges;

use crate::dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Client service
pub struct ClientService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClientService<'a> {
    /// Create a new ClientService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all clients newest-first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ClientResponse>> {
        let clients = self.ctx.client_repo().list().await?;
        Ok(clients.iter().map(ClientResponse::from).collect())
    }

    /// Create a new client
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateClientRequest) -> ServiceResult<ClientResponse> {
        let client = Client::new(request.name, request.contact_email, request.contact_phone);
        self.ctx.client_repo().create(&client).await?;

        info!(client_id = %client.id, "Client created");
        Ok(ClientResponse::from(client))
    }

    /// Apply a partial update to a client
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateClientRequest) -> ServiceResult<ClientResponse> {
        let changes = ClientChanges {
            name: request.name,
            contact_email: request.contact_email.map(Some),
            contact_phone: request.contact_phone.map(Some),
        };

        let client = self.ctx.client_repo().update(id, &changes).await?;
        Ok(ClientResponse::from(client))
    }

    /// Delete a client
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.client_repo().delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;

    #[tokio::test]
    async fn test_create_and_list() {
        let (ctx, _fakes) = test_context();
        let service = ClientService::new(&ctx);

        service
            .create(CreateClientRequest {
                name: "Northwind".to_string(),
                contact_email: Some("hello@northwind.example".to_string()),
                contact_phone: None,
            })
            .await
            .unwrap();

        let clients = service.list().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Northwind");
    }

    #[tokio::test]
    async fn test_update_unknown_client_is_not_found() {
        let (ctx, _fakes) = test_context();

        let err = ClientService::new(&ctx)
            .update(Uuid::new_v4(), UpdateClientRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }
}
