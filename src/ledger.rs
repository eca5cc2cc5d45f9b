//! Inventory ledger: how order lines move a product's quantity-left.
//!
//! A [`StockSheet`] holds in-memory copies of the products an order touches.
//! Every adjustment is made on the sheet first; the caller writes the
//! resulting products back only once all of them have been fetched.

use tracing::debug;

use crate::domain::{Product, ProductId};
use crate::error::{ServiceError, ServiceResult};

/// Working copies of the products touched by one order operation.
#[derive(Debug, Default)]
pub struct StockSheet {
    products: Vec<Product>,
}

impl StockSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Adds a fetched product. A product already on the sheet is kept as is.
    pub fn insert(&mut self, product: Product) {
        if !self.contains(product.id) {
            self.products.push(product);
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Takes `quantity` out of stock. There is no floor: the result may be negative.
    pub fn withdraw(&mut self, id: ProductId, quantity: i32) -> ServiceResult<()> {
        let product = self.entry(id)?;
        let current = product.quantity_left;
        product.quantity_left = current
            .checked_sub(quantity)
            .ok_or_else(|| out_of_range(id, current, quantity))?;
        debug!(product_id = %id, quantity, quantity_left = product.quantity_left, "Stock withdrawn");
        Ok(())
    }

    /// Puts `quantity` back into stock.
    ///
    /// Non-positive quantities are skipped and the product keeps its level.
    /// Returns whether the stock changed.
    pub fn restock(&mut self, id: ProductId, quantity: i32) -> ServiceResult<bool> {
        let product = self.entry(id)?;
        if quantity <= 0 {
            debug!(product_id = %id, quantity, "Skipping restock of non-positive quantity");
            return Ok(false);
        }
        let current = product.quantity_left;
        product.quantity_left = current
            .checked_add(quantity)
            .ok_or_else(|| out_of_range(id, current, quantity))?;
        debug!(product_id = %id, quantity, quantity_left = product.quantity_left, "Stock restored");
        Ok(true)
    }

    /// Products in the order they were first added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn entry(&mut self, id: ProductId) -> ServiceResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::InvalidState(format!("Product {id} is not on the stock sheet")))
    }
}

fn out_of_range(id: ProductId, quantity_left: i32, quantity: i32) -> ServiceError {
    ServiceError::InvalidState(format!(
        "Quantity {quantity} moves stock of product {id} out of range (currently {quantity_left})"
    ))
}
