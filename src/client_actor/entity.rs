use crate::actor_framework::Entity;
use crate::domain::{Client, ClientCreate, ClientId, ClientUpdate};

impl Entity for Client {
    type Id = ClientId;
    type CreateParams = ClientCreate;
    type UpdateParams = ClientUpdate;

    fn id(&self) -> &ClientId { &self.id }

    /// Creates a new Client from creation parameters.
    fn from_create_params(id: ClientId, params: ClientCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name, params.surname, params.email))
    }

    /// Overlays every provided field on the stored client.
    fn on_update(&mut self, update: ClientUpdate) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(surname) = update.surname {
            self.surname = surname;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    /// Emails are unique across clients, compared case-insensitively.
    fn conflicts_with(&self, other: &Self) -> Option<String> {
        self.email
            .eq_ignore_ascii_case(&other.email)
            .then(|| format!("Client with email {} already exists", self.email))
    }
}
