//! # order-desk
//!
//! Order management over an actor-backed store: clients place orders for
//! products, and each product's remaining stock follows the order lifecycle.
//!
//! ## Layers
//!
//! - **Store actors** - one [`ResourceActor`](actor_framework::ResourceActor) per
//!   record type, owning its records and serializing access → [`actor_framework`]
//! - **Stores** - narrow per-aggregate handles over the actors → [`stores`]
//! - **Ledger** - stock arithmetic for order creation and cancellation → [`ledger`]
//! - **Services** - CRUD and the order lifecycle → [`services`]
//! - **API** - axum routes and error rendering → [`api`]
//! - **System** - startup, wiring, tracing and configuration → [`app_system`]

pub mod actor_framework;
pub mod api;
pub mod app_system;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod services;
pub mod stores;

mod client_actor;
mod order_actor;
mod product_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

pub use app_system::{setup_tracing, Config, OrderSystem};
pub use error::{EntityKind, ServiceError, ServiceResult};
