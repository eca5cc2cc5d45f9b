use tracing::{debug, info, instrument, warn};

use crate::domain::{
    ClientId, OrderAggregate, OrderCreate, OrderId, OrderLineView, OrderState, OrderView,
};
use crate::error::{EntityKind, ServiceError, ServiceResult};
use crate::ledger::StockSheet;
use crate::stores::{ClientStore, OrderStore, ProductStore};

/// Order lifecycle: creation, state changes and cancellation, together with
/// their effect on product inventory.
///
/// Every operation that touches stock fetches all affected products first and
/// only then writes, so a missing product aborts the operation before any
/// inventory change is stored.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderStore,
    clients: ClientStore,
    products: ProductStore,
}

impl OrderService {
    pub fn new(orders: OrderStore, clients: ClientStore, products: ProductStore) -> Self {
        Self {
            orders,
            clients,
            products,
        }
    }

    /// Returns `None` when the order does not exist.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> ServiceResult<Option<OrderView>> {
        match self.orders.get_order_with_line_items(id).await? {
            Some(aggregate) => Ok(Some(self.view(aggregate).await?)),
            None => {
                debug!("Order not found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn orders_for_client(&self, client_id: ClientId) -> ServiceResult<Vec<OrderView>> {
        let orders = self.orders.orders_for_client(client_id).await?;
        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            let line_items = self.orders.line_items_for_order(order.id).await?;
            views.push(self.view(OrderAggregate { order, line_items }).await?);
        }
        info!(order_count = views.len(), "Listed orders for client");
        Ok(views)
    }

    /// Places an order and withdraws the requested quantities from stock.
    ///
    /// Steps:
    /// 1. **Validate client** exists
    /// 2. **Fetch every product**, failing on the first missing one
    /// 3. **Withdraw stock** on the fetched copies and write them back
    /// 4. **Store the order** in state `New` with its line items
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: Option<OrderCreate>) -> ServiceResult<OrderId> {
        let order = order.ok_or(ServiceError::NullInput("Order"))?;
        info!(
            client_id = %order.client_id,
            line_count = order.products.len(),
            "Processing create_order request"
        );

        // Step 1: Validate client
        match self.clients.get_client(order.client_id).await? {
            Some(client) => debug!(client_email = %client.email, "Client validation successful"),
            None => {
                warn!(client_id = %order.client_id, "Client not found");
                return Err(ServiceError::missing_reference(EntityKind::Client, order.client_id));
            }
        }

        // Step 2: Fetch all products before touching any stock
        let mut sheet = StockSheet::new();
        for line in &order.products {
            if sheet.contains(line.product_id) {
                continue;
            }
            match self.products.get_product(line.product_id).await? {
                Some(product) => sheet.insert(product),
                None => {
                    warn!(product_id = %line.product_id, "Product not found");
                    return Err(ServiceError::missing_reference(EntityKind::Product, line.product_id));
                }
            }
        }

        // Step 3: Withdraw stock and write the products back
        for line in &order.products {
            sheet.withdraw(line.product_id, line.quantity)?;
        }
        for product in sheet.products() {
            self.products.set_quantity_left(product.id, product.quantity_left).await?;
        }

        // Step 4: Store the order with its line items
        let order_id = self.orders.create_order(order.client_id, &order.products).await?;
        info!(%order_id, "Order created successfully");
        Ok(order_id)
    }

    /// Overwrites the order's state. Any transition is accepted.
    #[instrument(skip(self))]
    pub async fn update_order_state(&self, id: OrderId, state: OrderState) -> ServiceResult<()> {
        if self.orders.get_order(id).await?.is_none() {
            warn!("Order not found");
            return Err(ServiceError::missing_entity(EntityKind::Order, id));
        }
        self.orders.set_state(id, state).await?;
        info!("Order state updated");
        Ok(())
    }

    /// Returns the order's stock to inventory and deletes it with its line items.
    ///
    /// Line items with a non-positive quantity restore nothing, but their
    /// product is still written back unchanged.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> ServiceResult<()> {
        let Some(aggregate) = self.orders.get_order_with_line_items(id).await? else {
            warn!("Order not found");
            return Err(ServiceError::missing_entity(EntityKind::Order, id));
        };

        let mut sheet = StockSheet::new();
        for item in &aggregate.line_items {
            if item.product_id.is_nil() {
                return Err(ServiceError::InvalidState(format!(
                    "Line item {} of order {} has no product",
                    item.id, id
                )));
            }
            if sheet.contains(item.product_id) {
                continue;
            }
            match self.products.get_product(item.product_id).await? {
                Some(product) => sheet.insert(product),
                None => {
                    warn!(product_id = %item.product_id, "Product not found");
                    return Err(ServiceError::missing_reference(EntityKind::Product, item.product_id));
                }
            }
        }

        for item in &aggregate.line_items {
            sheet.restock(item.product_id, item.quantity)?;
        }
        for product in sheet.products() {
            self.products.set_quantity_left(product.id, product.quantity_left).await?;
        }

        self.orders.delete_order(id).await?;
        info!("Order cancelled");
        Ok(())
    }

    async fn view(&self, aggregate: OrderAggregate) -> ServiceResult<OrderView> {
        let OrderAggregate { order, line_items } = aggregate;
        let mut products = Vec::with_capacity(line_items.len());
        for item in line_items {
            products.push(OrderLineView {
                product_id: item.product_id,
                quantity: item.quantity,
                product: self.products.get_product(item.product_id).await?,
            });
        }
        Ok(OrderView {
            id: order.id,
            state: order.state,
            client_id: order.client_id,
            products,
        })
    }
}
