//! Business logic over the persistence ports.
//!
//! Services are cheap to clone and safe to share across request handlers; every
//! call is one logical unit of work made of store requests.

pub mod client_service;
pub mod product_service;
pub mod order_service;

pub use client_service::ClientService;
pub use product_service::ProductService;
pub use order_service::OrderService;
