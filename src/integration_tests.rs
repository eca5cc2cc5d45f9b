//! End-to-end behaviour of the services against live store actors.

use crate::app_system::{Config, OrderSystem};
use crate::domain::{
    ClientCreate, ClientId, OrderCreate, OrderState, OrderedQuantity, ProductCreate, ProductId,
};
use crate::error::{EntityKind, ServiceError};

async fn seeded() -> (OrderSystem, ClientId, ProductId) {
    let system = OrderSystem::new(&Config::default());
    let client_id = system
        .client_service
        .create_client(ClientCreate::new("Anna", "Nowak", "anna@example.com"))
        .await
        .unwrap();
    let product_id = system
        .product_service
        .create_product(ProductCreate::new("Widget", 2.5, 10))
        .await
        .unwrap();
    (system, client_id, product_id)
}

async fn quantity_left(system: &OrderSystem, id: ProductId) -> i32 {
    system.product_service.get_product(id).await.unwrap().unwrap().quantity_left
}

#[tokio::test]
async fn test_client_create_then_get_round_trips() {
    let system = OrderSystem::new(&Config::default());
    let input = ClientCreate::new("Jan", "Kowalski", "jan@example.com");

    let id = system.client_service.create_client(input.clone()).await.unwrap();
    let client = system.client_service.get_client(id).await.unwrap().unwrap();

    assert_eq!(client.id, id);
    assert_eq!(client.name, input.name);
    assert_eq!(client.surname, input.surname);
    assert_eq!(client.email, input.email);
    assert_eq!(system.client_service.get_all_clients().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_email_is_unique() {
    let (system, first, _) = seeded().await;

    let duplicate = ClientCreate::new("Hanna", "Nowak", "ANNA@example.com");
    let result = system.client_service.create_client(duplicate).await;
    assert!(matches!(result, Err(ServiceError::Conflict(_))));

    let second = system
        .client_service
        .create_client(ClientCreate::new("Jan", "Kowalski", "jan@example.com"))
        .await
        .unwrap();
    let taken = ClientCreate::new("Jan", "Kowalski", "anna@example.com");
    let result = system.client_service.update_client(second, taken).await;
    assert!(matches!(result, Err(ServiceError::Conflict(_))));

    // A client may keep its own email
    let same = ClientCreate::new("Anna", "Kowalska", "anna@example.com");
    system.client_service.update_client(first, same).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_missing_records() {
    let system = OrderSystem::new(&Config::default());
    let client_id = ClientId::new();
    let product_id = ProductId::new();

    let result = system
        .client_service
        .update_client(client_id, ClientCreate::new("Jan", "Kowalski", "jan@example.com"))
        .await;
    assert_eq!(result, Err(ServiceError::missing_entity(EntityKind::Client, client_id)));
    assert_eq!(
        system.client_service.delete_client(client_id).await,
        Err(ServiceError::missing_entity(EntityKind::Client, client_id))
    );
    assert_eq!(
        system.product_service.delete_product(product_id).await,
        Err(ServiceError::missing_entity(EntityKind::Product, product_id))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_update_overlays_fields() {
    let (system, _, product_id) = seeded().await;

    system
        .product_service
        .update_product(product_id, Some(ProductCreate::new("Gadget", 4.0, 25)))
        .await
        .unwrap();

    let product = system.product_service.get_product(product_id).await.unwrap().unwrap();
    assert_eq!(product.name, "Gadget");
    assert_eq!(product.price, 4.0);
    assert_eq!(product.quantity_left, 25);

    system.product_service.delete_product(product_id).await.unwrap();
    assert_eq!(system.product_service.get_product(product_id).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_with_no_products() {
    let (system, client_id, product_id) = seeded().await;

    let order_id = system
        .order_service
        .create_order(Some(OrderCreate { client_id, products: vec![] }))
        .await
        .unwrap();

    let view = system.order_service.get_order(order_id).await.unwrap().unwrap();
    assert_eq!(view.state, OrderState::New);
    assert_eq!(view.client_id, client_id);
    assert!(view.products.is_empty());
    assert_eq!(quantity_left(&system, product_id).await, 10);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_withdraws_stock() {
    let (system, client_id, product_id) = seeded().await;

    let order_id = system
        .order_service
        .create_order(Some(OrderCreate::new(client_id, [(product_id, 1)])))
        .await
        .unwrap();

    assert_eq!(quantity_left(&system, product_id).await, 9);
    let view = system.order_service.get_order(order_id).await.unwrap().unwrap();
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].quantity, 1);
    assert_eq!(view.products[0].product.as_ref().map(|p| p.quantity_left), Some(9));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_may_overdraw_stock() {
    let (system, client_id, product_id) = seeded().await;

    system
        .order_service
        .create_order(Some(OrderCreate::new(client_id, [(product_id, 7), (product_id, 8)])))
        .await
        .unwrap();

    assert_eq!(quantity_left(&system, product_id).await, -5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_product_leaves_stock_untouched() {
    let (system, client_id, product_id) = seeded().await;
    let missing = ProductId::new();

    let result = system
        .order_service
        .create_order(Some(OrderCreate::new(client_id, [(product_id, 1), (missing, 1)])))
        .await;

    assert_eq!(result, Err(ServiceError::missing_reference(EntityKind::Product, missing)));
    assert_eq!(quantity_left(&system, product_id).await, 10);
    assert!(system.order_service.orders_for_client(client_id).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_for_missing_client_fails() {
    let (system, _, product_id) = seeded().await;
    let stranger = ClientId::new();

    let result = system
        .order_service
        .create_order(Some(OrderCreate::new(stranger, [(product_id, 1)])))
        .await;

    assert_eq!(result, Err(ServiceError::missing_reference(EntityKind::Client, stranger)));
    assert_eq!(quantity_left(&system, product_id).await, 10);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_restores_stock_and_deletes_order() {
    let (system, client_id, product_id) = seeded().await;
    let order_id = system
        .order_service
        .create_order(Some(OrderCreate::new(client_id, [(product_id, 1)])))
        .await
        .unwrap();
    assert_eq!(quantity_left(&system, product_id).await, 9);

    system.order_service.cancel_order(order_id).await.unwrap();

    assert_eq!(quantity_left(&system, product_id).await, 10);
    assert_eq!(system.order_service.get_order(order_id).await.unwrap(), None);
    assert_eq!(
        system.order_service.cancel_order(order_id).await,
        Err(ServiceError::missing_entity(EntityKind::Order, order_id))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_adds_line_quantity_on_top_of_current_stock() {
    let (system, client_id, product_id) = seeded().await;
    let order_id = system
        .order_service
        .create_order(Some(OrderCreate::new(client_id, [(product_id, 1)])))
        .await
        .unwrap();
    system
        .product_service
        .update_product(product_id, Some(ProductCreate::new("Widget", 2.5, 10)))
        .await
        .unwrap();

    system.order_service.cancel_order(order_id).await.unwrap();

    assert_eq!(quantity_left(&system, product_id).await, 11);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_skips_non_positive_line_quantities() {
    for quantity in [0, -3] {
        let (system, client_id, product_id) = seeded().await;
        let order_id = system
            .order_service
            .create_order(Some(OrderCreate::new(client_id, [(product_id, quantity)])))
            .await
            .unwrap();
        // Reset the stock so only the cancellation is observed
        system
            .product_service
            .update_product(product_id, Some(ProductCreate::new("Widget", 2.5, 10)))
            .await
            .unwrap();

        system.order_service.cancel_order(order_id).await.unwrap();

        assert_eq!(quantity_left(&system, product_id).await, 10, "line quantity {quantity}");
        assert_eq!(system.order_service.get_order(order_id).await.unwrap(), None);

        system.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn test_cancel_fails_when_product_was_deleted() {
    let (system, client_id, product_id) = seeded().await;
    let other = system
        .product_service
        .create_product(ProductCreate::new("Gadget", 1.0, 5))
        .await
        .unwrap();
    let order = OrderCreate {
        client_id,
        products: vec![
            OrderedQuantity { product_id: other, quantity: 2 },
            OrderedQuantity { product_id, quantity: 1 },
        ],
    };
    let order_id = system.order_service.create_order(Some(order)).await.unwrap();
    system.product_service.delete_product(product_id).await.unwrap();

    let result = system.order_service.cancel_order(order_id).await;

    assert_eq!(result, Err(ServiceError::missing_reference(EntityKind::Product, product_id)));
    // Nothing was restored and the order is still there
    assert_eq!(quantity_left(&system, other).await, 3);
    assert!(system.order_service.get_order(order_id).await.unwrap().is_some());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_order_state() {
    let (system, client_id, _) = seeded().await;
    let order_id = system
        .order_service
        .create_order(Some(OrderCreate { client_id, products: vec![] }))
        .await
        .unwrap();

    system.order_service.update_order_state(order_id, OrderState::InProgress).await.unwrap();
    let view = system.order_service.get_order(order_id).await.unwrap().unwrap();
    assert_eq!(view.state, OrderState::InProgress);

    // No transition rules: a completed order can go back to New
    system.order_service.update_order_state(order_id, OrderState::Completed).await.unwrap();
    system.order_service.update_order_state(order_id, OrderState::New).await.unwrap();
    let view = system.order_service.get_order(order_id).await.unwrap().unwrap();
    assert_eq!(view.state, OrderState::New);

    let missing = crate::domain::OrderId::new();
    assert_eq!(
        system.order_service.update_order_state(missing, OrderState::InProgress).await,
        Err(ServiceError::missing_entity(EntityKind::Order, missing))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_for_client() {
    let (system, client_id, product_id) = seeded().await;
    let other_client = system
        .client_service
        .create_client(ClientCreate::new("Jan", "Kowalski", "jan@example.com"))
        .await
        .unwrap();

    for _ in 0..2 {
        system
            .order_service
            .create_order(Some(OrderCreate::new(client_id, [(product_id, 1)])))
            .await
            .unwrap();
    }
    system
        .order_service
        .create_order(Some(OrderCreate::new(other_client, [(product_id, 1)])))
        .await
        .unwrap();

    let orders = system.order_service.orders_for_client(client_id).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.client_id == client_id));
    assert!(system.order_service.orders_for_client(ClientId::new()).await.unwrap().is_empty());
    assert_eq!(quantity_left(&system, product_id).await, 7);

    system.shutdown().await.unwrap();
}
