use serde::{Deserialize, Serialize};
use validator::Validate;

entity_id!(
    /// Type-safe identifier for Products.
    ProductId
);

/// Represents a product in the inventory.
///
/// `quantity_left` is signed: orders may request more than is in stock and
/// drive it negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity_left: i32,
}

/// Payload for creating a product, and the full overlay used on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub quantity_left: i32,
}

/// Field-wise changes applied to a stored product.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity_left: Option<i32>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity_left: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity_left,
        }
    }
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64, quantity_left: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity_left,
        }
    }
}

impl From<ProductCreate> for ProductUpdate {
    fn from(input: ProductCreate) -> Self {
        Self {
            name: Some(input.name),
            price: Some(input.price),
            quantity_left: Some(input.quantity_left),
        }
    }
}
