//! Client entity <-> model mapper

use worktrack_core::entities::Client;

use crate::models::ClientModel;

/// Convert ClientModel to Client entity
impl From<ClientModel> for Client {
    fn from(model: ClientModel) -> Self {
        Client {
            id: model.id,
            name: model.name,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            created_at: model.created_at,
        }
    }
}
