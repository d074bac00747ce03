//! Product resource service.
//!
//! Implements the driving ports over an injected repository. Each operation
//! is stateless between invocations and performs at most one store write:
//! validation happens before persistence, and the read-by-id lookup is
//! reused by both update and delete.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::domain::ports::{
    CreateProductResponse, DeleteProductResponse, ProductRepository, ProductRepositoryError,
    ProductsCommand, ProductsQuery, UpdateProductResponse,
};
use crate::domain::serializer::{self, ProductRepresentation};
use crate::domain::{Error, ProductId};

/// Product service implementing the driving ports.
#[derive(Clone)]
pub struct ProductService<R> {
    repository: Arc<R>,
}

impl<R> ProductService<R> {
    /// Create a new service with the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    fn map_repository_error(error: ProductRepositoryError) -> Error {
        match error {
            ProductRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("product repository unavailable: {message}"))
            }
            ProductRepositoryError::Query { message } => {
                Error::internal(format!("product repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> ProductsQuery for ProductService<R>
where
    R: ProductRepository,
{
    async fn list_products(&self) -> Result<Vec<ProductRepresentation>, Error> {
        let products = self
            .repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(products.iter().map(serializer::representation).collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<ProductRepresentation>, Error> {
        let product = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?;
        Ok(product.as_ref().map(serializer::representation))
    }
}

#[async_trait]
impl<R> ProductsCommand for ProductService<R>
where
    R: ProductRepository,
{
    async fn create_product(&self, data: Value) -> Result<CreateProductResponse, Error> {
        let draft = match serializer::validate_new(&data) {
            Ok(draft) => draft,
            Err(errors) => return Ok(CreateProductResponse::Invalid(errors)),
        };

        let created = self
            .repository
            .insert(&draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(product_id = %created.id, "product created");
        Ok(CreateProductResponse::Created(serializer::representation(
            &created,
        )))
    }

    async fn update_product(
        &self,
        id: ProductId,
        data: Value,
    ) -> Result<UpdateProductResponse, Error> {
        let Some(existing) = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
        else {
            return Ok(UpdateProductResponse::NotFound);
        };

        let merged = match serializer::validate_update(&existing, &data) {
            Ok(merged) => merged,
            Err(errors) => return Ok(UpdateProductResponse::Invalid(errors)),
        };

        let updated = self
            .repository
            .update(&merged)
            .await
            .map_err(Self::map_repository_error)?;
        info!(product_id = %updated.id, "product updated");
        Ok(UpdateProductResponse::Updated(serializer::representation(
            &updated,
        )))
    }

    async fn delete_product(&self, id: ProductId) -> Result<DeleteProductResponse, Error> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?;
        if found.is_none() {
            return Ok(DeleteProductResponse::NotFound);
        }

        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !removed {
            // The record vanished between lookup and removal.
            return Ok(DeleteProductResponse::NotFound);
        }
        info!(product_id = %id, "product deleted");
        Ok(DeleteProductResponse::Deleted)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
