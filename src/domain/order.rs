use serde::{Deserialize, Serialize};

use super::{ClientId, Product, ProductId};

entity_id!(
    /// Type-safe identifier for Orders.
    OrderId
);

entity_id!(
    /// Type-safe identifier for order line items.
    LineItemId
);

/// Where an order is in its lifecycle. Any state may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderState {
    #[default]
    New,
    InProgress,
    Completed,
    Cancelled,
}

/// Represents a customer order.
///
/// The owning client is fixed at creation. Line items are separate records
/// pointing back through [`LineItem::order_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    pub state: OrderState,
}

/// Join record: one product and the quantity requested for it within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// One requested (product, quantity) pair of an incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedQuantity {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Incoming order descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub client_id: ClientId,
    #[serde(default)]
    pub products: Vec<OrderedQuantity>,
}

/// Creation parameters of the stored order record.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client_id: ClientId,
}

/// Creation parameters of a stored line item.
#[derive(Debug, Clone)]
pub struct NewLineItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Changes applied to a stored order. Only the state is mutable.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub state: Option<OrderState>,
}

/// An order together with all of its line items.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAggregate {
    pub order: Order,
    pub line_items: Vec<LineItem>,
}

/// Read model of an order as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub state: OrderState,
    pub client_id: ClientId,
    pub products: Vec<OrderLineView>,
}

/// A line of [`OrderView`]. `product` is absent once the product was deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineView {
    pub product_id: ProductId,
    pub quantity: i32,
    pub product: Option<Product>,
}

impl OrderCreate {
    pub fn new(client_id: ClientId, products: impl IntoIterator<Item = (ProductId, i32)>) -> Self {
        Self {
            client_id,
            products: products
                .into_iter()
                .map(|(product_id, quantity)| OrderedQuantity { product_id, quantity })
                .collect(),
        }
    }
}
