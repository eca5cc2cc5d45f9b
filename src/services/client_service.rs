use tracing::{info, instrument, warn};

use crate::domain::{Client, ClientCreate, ClientId};
use crate::error::{EntityKind, ServiceError, ServiceResult};
use crate::stores::ClientStore;

/// Existence-checked CRUD over clients.
#[derive(Clone)]
pub struct ClientService {
    clients: ClientStore,
}

impl ClientService {
    pub fn new(clients: ClientStore) -> Self {
        Self { clients }
    }

    #[instrument(skip(self))]
    pub async fn get_all_clients(&self) -> ServiceResult<Vec<Client>> {
        Ok(self.clients.list_clients().await?)
    }

    /// Returns `None` when the client does not exist.
    #[instrument(skip(self))]
    pub async fn get_client(&self, id: ClientId) -> ServiceResult<Option<Client>> {
        Ok(self.clients.get_client(id).await?)
    }

    #[instrument(skip(self, client), fields(client_email = %client.email))]
    pub async fn create_client(&self, client: ClientCreate) -> ServiceResult<ClientId> {
        let id = self.clients.create_client(client).await?;
        info!(client_id = %id, "Client created successfully");
        Ok(id)
    }

    #[instrument(skip(self, client))]
    pub async fn update_client(&self, id: ClientId, client: ClientCreate) -> ServiceResult<()> {
        self.require_client(id).await?;
        self.clients.update_client(id, client.into()).await?;
        info!("Client updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: ClientId) -> ServiceResult<()> {
        self.require_client(id).await?;
        self.clients.delete_client(id).await?;
        info!("Client deleted successfully");
        Ok(())
    }

    async fn require_client(&self, id: ClientId) -> ServiceResult<Client> {
        match self.clients.get_client(id).await? {
            Some(client) => Ok(client),
            None => {
                warn!(client_id = %id, "Client not found");
                Err(ServiceError::missing_entity(EntityKind::Client, id))
            }
        }
    }
}
