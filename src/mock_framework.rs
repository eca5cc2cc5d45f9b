//! # Mock Framework
//!
//! Utilities for testing services in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_update`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

pub type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a `ResourceActor`, the client sends to a channel the
/// test controls. The test reads each request, asserts on it, and answers through
/// the enclosed responder, which makes store behaviour (hits, misses, failures)
/// fully deterministic. Whatever is left unread on the receiver is a request the
/// code under test should not have made.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::UpdateParams, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, params, respond_to }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Asserts that nothing else was sent to this mock.
pub fn expect_no_requests<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    assert!(receiver.try_recv().is_err(), "unexpected request sent to mock store");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Client, ClientCreate, ClientId};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Client>(10);
        let id = ClientId::new();

        // Test Create
        let create_task = tokio::spawn(async move {
            let params = ClientCreate::new("Test", "Tester", "test@example.com");
            client.create(params).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Ok(id)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(id));
        expect_no_requests(&mut receiver);
    }
}
