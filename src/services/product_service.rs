use tracing::{info, instrument, warn};

use crate::domain::{Product, ProductCreate, ProductId};
use crate::error::{EntityKind, ServiceError, ServiceResult};
use crate::stores::ProductStore;

/// Existence-checked CRUD over products.
#[derive(Clone)]
pub struct ProductService {
    products: ProductStore,
}

impl ProductService {
    pub fn new(products: ProductStore) -> Self {
        Self { products }
    }

    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.products.list_products().await?)
    }

    /// Returns `None` when the product does not exist.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        Ok(self.products.get_product(id).await?)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create_product(&self, product: ProductCreate) -> ServiceResult<ProductId> {
        let id = self.products.create_product(product).await?;
        info!(product_id = %id, "Product created successfully");
        Ok(id)
    }

    #[instrument(skip(self, product))]
    pub async fn update_product(&self, id: ProductId, product: Option<ProductCreate>) -> ServiceResult<()> {
        let product = product.ok_or(ServiceError::NullInput("Product"))?;
        self.require_product(id).await?;
        self.products.update_product(id, product.into()).await?;
        info!("Product updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> ServiceResult<()> {
        self.require_product(id).await?;
        self.products.delete_product(id).await?;
        info!("Product deleted successfully");
        Ok(())
    }

    async fn require_product(&self, id: ProductId) -> ServiceResult<Product> {
        match self.products.get_product(id).await? {
            Some(product) => Ok(product),
            None => {
                warn!(product_id = %id, "Product not found");
                Err(ServiceError::missing_entity(EntityKind::Product, id))
            }
        }
    }
}
