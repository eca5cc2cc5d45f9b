//! Narrow persistence ports, one per aggregate.
//!
//! Each store is a cheap, cloneable handle over one or more
//! [`ResourceClient`](crate::actor_framework::ResourceClient)s and exposes only
//! the lookups and writes the services need.

pub mod macros;
pub mod client_store;
pub mod product_store;
pub mod order_store;

pub use client_store::ClientStore;
pub use product_store::ProductStore;
pub use order_store::OrderStore;
