use std::fmt;

use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Client,
    Product,
    Order,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Client => "Client",
            EntityKind::Product => "Product",
            EntityKind::Order => "Order",
        };
        f.write_str(name)
    }
}

/// Errors raised by the client, product and order services.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// A required input descriptor was absent.
    #[error("{0} is required")]
    NullInput(&'static str),
    /// An id carried by the request does not resolve.
    #[error("{kind} with id {id} does not exist")]
    NotFoundReference { kind: EntityKind, id: String },
    /// The record an operation targets does not exist.
    #[error("{kind} with id {id} does not exist")]
    NotFoundEntity { kind: EntityKind, id: String },
    #[error("Inconsistent data: {0}")]
    InvalidState(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Store error: {0}")]
    Store(FrameworkError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn missing_reference(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFoundReference { kind, id: id.to_string() }
    }

    pub fn missing_entity(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFoundEntity { kind, id: id.to_string() }
    }
}

impl From<FrameworkError> for ServiceError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Conflict(reason) => ServiceError::Conflict(reason),
            other => ServiceError::Store(other),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(e: validator::ValidationErrors) -> Self {
        ServiceError::Validation(e.to_string())
    }
}
