//! Port for product persistence.
//!
//! The [`ProductRepository`] trait defines the storage contract consumed by
//! the product service. Adapters implement this trait to provide durable
//! storage (e.g., PostgreSQL) or an in-memory substitute for tests and
//! database-less development.

use async_trait::async_trait;

use crate::domain::{Product, ProductDraft, ProductId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
    }
}

/// Port for product storage and retrieval.
///
/// Absence is signalled with `Option`, never an error: `find_by_id` returns
/// `None` for an unknown identifier and `delete` reports whether a row was
/// removed. Identifier allocation is the adapter's responsibility; `insert`
/// returns the persisted record with its assigned id and audit timestamps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product record, in store order.
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch a single record by identifier.
    ///
    /// Returns `None` when no record matches; only infrastructure failures
    /// surface as errors.
    async fn find_by_id(&self, id: ProductId)
    -> Result<Option<Product>, ProductRepositoryError>;

    /// Persist a new record, returning it with store-assigned fields.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError>;

    /// Persist a full replacement of an existing record.
    ///
    /// The adapter refreshes the modification timestamp and returns the
    /// persisted record.
    async fn update(&self, product: &Product) -> Result<Product, ProductRepositoryError>;

    /// Remove a record by identifier.
    ///
    /// Returns `true` when a row was removed, `false` when the identifier
    /// matched nothing.
    async fn delete(&self, id: ProductId) -> Result<bool, ProductRepositoryError>;
}
