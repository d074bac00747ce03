//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.
//!
//! Implements the domain's storage port over an async connection pool. The
//! database owns identifier allocation and audit timestamps; this adapter
//! only maps between rows and domain values and translates Diesel failures
//! into port errors.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId};

use super::models::{NewProductRow, ProductChangeset, ProductRow};
use super::pool::{DbPool, PoolError};
use super::schema::products;

/// Diesel-backed implementation of the `ProductRepository` port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProductRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> ProductRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ProductRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ProductRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProductRepositoryError::connection("database connection error")
        }
        _ => ProductRepositoryError::query("database error"),
    }
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProductRow> = products::table
            .filter(products::id.eq(id.get()))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Product::from))
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewProductRow {
            name: &draft.name,
            description: draft.description.as_deref(),
            price: draft.price,
        };

        let row: ProductRow = diesel::insert_into(products::table)
            .values(&new_row)
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Product::from(row))
    }

    async fn update(&self, product: &Product) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = ProductChangeset {
            name: &product.name,
            description: product.description.as_deref(),
            price: product.price,
            updated_at: Utc::now(),
        };

        let row: ProductRow = diesel::update(products::table.filter(products::id.eq(product.id.get())))
            .set(&changeset)
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Product::from(row))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(products::table.filter(products::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            ProductRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, ProductRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn diesel_closed_connection_maps_to_connection_error() {
        let repo_err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_owned()),
        ));

        assert!(matches!(
            repo_err,
            ProductRepositoryError::Connection { .. }
        ));
    }
}
