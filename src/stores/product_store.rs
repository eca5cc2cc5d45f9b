use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Product, ProductCreate, ProductId, ProductUpdate};

/// Store handle for Product records.
#[derive(Clone)]
pub struct ProductStore {
    inner: ResourceClient<Product>,
}

crate::impl_basic_store!(ProductStore, Product, ProductId, product);

impl ProductStore {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<ProductId, FrameworkError> {
        debug!("Sending request");
        self.inner.create(product).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<Product, FrameworkError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }

    /// Writes back a stock level computed by the inventory ledger.
    #[instrument(skip(self))]
    pub async fn set_quantity_left(&self, id: ProductId, quantity_left: i32) -> Result<Product, FrameworkError> {
        debug!("Sending request");
        let update = ProductUpdate {
            quantity_left: Some(quantity_left),
            ..Default::default()
        };
        self.inner.update(id, update).await
    }
}
