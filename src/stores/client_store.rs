use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Client, ClientCreate, ClientId, ClientUpdate};

/// Store handle for Client records.
#[derive(Clone)]
pub struct ClientStore {
    inner: ResourceClient<Client>,
}

crate::impl_basic_store!(ClientStore, Client, ClientId, client);

impl ClientStore {
    #[instrument(skip(self, client), fields(client_email = %client.email))]
    pub async fn create_client(&self, client: ClientCreate) -> Result<ClientId, FrameworkError> {
        debug!("Sending request");
        self.inner.create(client).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_client(&self, id: ClientId, update: ClientUpdate) -> Result<Client, FrameworkError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}
