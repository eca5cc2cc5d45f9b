use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{
    ClientId, LineItem, NewLineItem, NewOrder, Order, OrderAggregate, OrderId, OrderState,
    OrderUpdate, OrderedQuantity,
};

/// Store handle for the order aggregate: order records plus their line items.
///
/// Line items live in their own store and point back through
/// `order_id`; this handle keeps the two consistent on create and delete.
#[derive(Clone)]
pub struct OrderStore {
    inner: ResourceClient<Order>,
    line_items: ResourceClient<LineItem>,
}

impl OrderStore {
    pub fn new(inner: ResourceClient<Order>, line_items: ResourceClient<LineItem>) -> Self {
        Self { inner, line_items }
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, FrameworkError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    /// Fetches the order together with every line item that belongs to it.
    #[instrument(skip(self))]
    pub async fn get_order_with_line_items(&self, id: OrderId) -> Result<Option<OrderAggregate>, FrameworkError> {
        debug!("Sending request");
        let Some(order) = self.inner.get(id).await? else {
            return Ok(None);
        };
        let line_items = self.line_items_for_order(id).await?;
        Ok(Some(OrderAggregate { order, line_items }))
    }

    #[instrument(skip(self))]
    pub async fn line_items_for_order(&self, order_id: OrderId) -> Result<Vec<LineItem>, FrameworkError> {
        debug!("Sending request");
        let items = self.line_items.list().await?;
        Ok(items.into_iter().filter(|item| item.order_id == order_id).collect())
    }

    #[instrument(skip(self))]
    pub async fn orders_for_client(&self, client_id: ClientId) -> Result<Vec<Order>, FrameworkError> {
        debug!("Sending request");
        let orders = self.inner.list().await?;
        Ok(orders.into_iter().filter(|order| order.client_id == client_id).collect())
    }

    /// Writes a new order and one line item per requested pair.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn create_order(&self, client_id: ClientId, lines: &[OrderedQuantity]) -> Result<OrderId, FrameworkError> {
        debug!("Sending request");
        let order_id = self.inner.create(NewOrder { client_id }).await?;
        for line in lines {
            self.line_items
                .create(NewLineItem {
                    order_id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .await?;
        }
        info!(%order_id, "Order stored");
        Ok(order_id)
    }

    #[instrument(skip(self))]
    pub async fn set_state(&self, id: OrderId, state: OrderState) -> Result<Order, FrameworkError> {
        debug!("Sending request");
        self.inner.update(id, OrderUpdate { state: Some(state) }).await
    }

    /// Deletes the order, then every line item pointing at it.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), FrameworkError> {
        debug!("Sending request");
        self.inner.delete(id).await?;
        for item in self.line_items_for_order(id).await? {
            self.line_items.delete(item.id).await?;
        }
        Ok(())
    }
}
