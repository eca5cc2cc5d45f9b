use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductId, ProductUpdate};

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;

    fn id(&self) -> &ProductId { &self.id }

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name, params.price, params.quantity_left))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: Product name
    /// - `price`: Product price
    /// - `quantity_left`: Remaining stock, written back by the inventory ledger
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity_left) = update.quantity_left {
            self.quantity_left = quantity_left;
        }
        Ok(())
    }
}
