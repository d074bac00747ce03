//! Persistence adapters for the product repository port.
//!
//! The PostgreSQL adapter is built on Diesel with `diesel-async`; the
//! in-memory adapter backs tests and database-less development runs.

mod diesel_product_repository;
mod memory;
mod migrations;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_product_repository::DieselProductRepository;
pub use memory::InMemoryProductRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
