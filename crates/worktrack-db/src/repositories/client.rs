//! PostgreSQL implementation of ClientRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use worktrack_core::entities::Client;
use worktrack_core::traits::{ClientChanges, ClientRepository, RepoResult};

use crate::models::ClientModel;

use super::error::{client_not_found, map_db_error};

/// PostgreSQL implementation of ClientRepository
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    /// Create a new PgClientRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Client>> {
        let result = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, contact_email, contact_phone, created_at
            FROM clients
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Client::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, contact_email, contact_phone, created_at
            FROM clients
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn create(&self, client: &Client) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO clients (id, name, contact_email, contact_phone, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.contact_email)
        .bind(&client.contact_phone)
        .bind(client.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: &ClientChanges) -> RepoResult<Client> {
        let mut client = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| client_not_found(id))?;

        if let Some(name) = &changes.name {
            client.name = name.clone();
        }
        if let Some(contact_email) = &changes.contact_email {
            client.contact_email = contact_email.clone();
        }
        if let Some(contact_phone) = &changes.contact_phone {
            client.contact_phone = contact_phone.clone();
        }

        let result = sqlx::query(
            r"
            UPDATE clients
            SET name = $2, contact_email = $3, contact_phone = $4
            WHERE id = $1
            ",
        )
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.contact_email)
        .bind(&client.contact_phone)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(client_not_found(id));
        }

        Ok(client)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(client_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgClientRepository>();
    }
}
