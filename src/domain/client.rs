use serde::{Deserialize, Serialize};
use validator::Validate;

entity_id!(
    /// Type-safe identifier for Clients.
    ClientId
);

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Payload for creating a client, and the full overlay used on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreate {
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    #[validate(length(min = 3, max = 50))]
    pub surname: String,
    #[validate(email, length(max = 100))]
    pub email: String,
}

/// Field-wise changes applied to a stored client.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

impl Client {
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}

impl ClientCreate {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}

impl From<ClientCreate> for ClientUpdate {
    fn from(input: ClientCreate) -> Self {
        Self {
            name: Some(input.name),
            surname: Some(input.surname),
            email: Some(input.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_create_validation() {
        assert!(ClientCreate::new("Anna", "Nowak", "anna@example.com").validate().is_ok());
        assert!(ClientCreate::new("An", "Nowak", "anna@example.com").validate().is_err());
        assert!(ClientCreate::new("Anna", "Nowak", "not-an-email").validate().is_err());

        let long_email = format!("{}@example.com", "a".repeat(95));
        assert!(ClientCreate::new("Anna", "Nowak", long_email).validate().is_err());
    }

    #[test]
    fn test_client_json_is_camel_case() {
        let client = Client::new(ClientId::new(), "Anna", "Nowak", "anna@example.com");
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["surname"], "Nowak");
        assert_eq!(json["id"], client.id.to_string());
    }
}
