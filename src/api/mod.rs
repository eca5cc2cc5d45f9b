//! HTTP boundary: routes, input validation and error rendering.

mod clients;
mod extract;
mod error;
mod orders;
mod products;

pub use error::ApiResult;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::app_system::OrderSystem;
use crate::services::{ClientService, OrderService, ProductService};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub clients: ClientService,
    pub products: ProductService,
    pub orders: OrderService,
}

impl From<&OrderSystem> for AppState {
    fn from(system: &OrderSystem) -> Self {
        Self {
            clients: system.client_service.clone(),
            products: system.product_service.clone(),
            orders: system.order_service.clone(),
        }
    }
}

/// Build the application router with every route and the request trace layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(clients::router())
        .merge(products::router())
        .merge(orders::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
