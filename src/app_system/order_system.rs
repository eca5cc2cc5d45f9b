use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::app_system::Config;
use crate::domain::{Client, ClientId, LineItem, LineItemId, Order, OrderId, Product, ProductId};
use crate::services::{ClientService, OrderService, ProductService};
use crate::stores::{ClientStore, OrderStore, ProductStore};

/// The running application: one store actor per record type plus the services
/// wired on top of them.
///
/// Must be created inside a tokio runtime.
pub struct OrderSystem {
    pub client_service: ClientService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Create and start the entire actor system
    ///
    /// **Startup Order:**
    /// 1. Start the store actors (no dependencies)
    /// 2. Build the per-aggregate stores over their clients
    /// 3. Build the services, injecting the stores they need
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        info!("Starting order system");
        let buffer_size = config.actor_buffer_size;

        let (client_actor, client_inner) = ResourceActor::<Client>::new(buffer_size, ClientId::new);
        let (product_actor, product_inner) = ResourceActor::<Product>::new(buffer_size, ProductId::new);
        let (order_actor, order_inner) = ResourceActor::<Order>::new(buffer_size, OrderId::new);
        let (line_item_actor, line_item_inner) = ResourceActor::<LineItem>::new(buffer_size, LineItemId::new);

        let handles = vec![
            tokio::spawn(client_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(line_item_actor.run()),
        ];

        let clients = ClientStore::new(client_inner);
        let products = ProductStore::new(product_inner);
        let orders = OrderStore::new(order_inner, line_item_inner);

        info!("Order system started successfully");

        Self {
            client_service: ClientService::new(clients.clone()),
            product_service: ProductService::new(products.clone()),
            order_service: OrderService::new(orders, clients, products),
            handles,
        }
    }

    /// Gracefully shutdown the entire actor system
    ///
    /// Dropping the services closes the store channels; each actor then drains
    /// and stops. Any service clone still alive elsewhere keeps its actor running,
    /// so callers drop those (e.g. the HTTP router) first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down order system");

        drop(self.order_service);
        drop(self.client_service);
        drop(self.product_service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store actor failed");
                return Err(e);
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
