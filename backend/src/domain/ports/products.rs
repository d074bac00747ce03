//! Driving ports for the product resource.
//!
//! The HTTP adapter depends on these traits only; the service implements
//! them. Outcomes that are part of the resource contract (validation
//! failure, not-found) are modelled as response variants, while
//! infrastructure failures travel through [`Error`].

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, ProductId};
use crate::domain::serializer::{ProductRepresentation, ValidationErrors};

/// Outcome of a create operation.
#[derive(Debug, Clone)]
pub enum CreateProductResponse {
    /// The payload validated and one record was inserted.
    Created(ProductRepresentation),
    /// The payload failed validation; nothing was inserted.
    Invalid(ValidationErrors),
}

/// Outcome of an update operation.
#[derive(Debug, Clone)]
pub enum UpdateProductResponse {
    /// The payload validated and the record was replaced.
    Updated(ProductRepresentation),
    /// The payload failed validation; nothing was written.
    Invalid(ValidationErrors),
    /// No record matches the identifier.
    NotFound,
}

/// Outcome of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteProductResponse {
    /// The record existed and was removed.
    Deleted,
    /// No record matches the identifier.
    NotFound,
}

/// Read-side port over the product resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsQuery: Send + Sync {
    /// Fetch all products, serialized, in store order.
    async fn list_products(&self) -> Result<Vec<ProductRepresentation>, Error>;

    /// Fetch one product, serialized, or `None` when the id matches nothing.
    async fn get_product(&self, id: ProductId) -> Result<Option<ProductRepresentation>, Error>;
}

/// Write-side port over the product resource.
///
/// `data` arguments are untyped field-mappings; validation and shaping are
/// delegated to the serialization collaborator by the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsCommand: Send + Sync {
    /// Validate `data` and insert a new record on success.
    async fn create_product(&self, data: Value) -> Result<CreateProductResponse, Error>;

    /// Validate `data` against the stored record and persist the merge.
    async fn update_product(
        &self,
        id: ProductId,
        data: Value,
    ) -> Result<UpdateProductResponse, Error>;

    /// Remove the record with the given identifier.
    async fn delete_product(&self, id: ProductId) -> Result<DeleteProductResponse, Error>;
}
