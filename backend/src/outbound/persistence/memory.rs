//! In-memory `ProductRepository` implementation.
//!
//! Backs integration tests and database-less development runs. Identifier
//! allocation mirrors the database adapter: ids are serial, starting at 1,
//! and never reused within a process.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId};

/// Process-local product store.
#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
}

impl InMemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ProductRepositoryError> {
        self.inner
            .lock()
            .map_err(|_| ProductRepositoryError::query("product store lock poisoned"))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let store = self.lock()?;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<Product>, ProductRepositoryError> {
        let store = self.lock()?;
        Ok(store.rows.get(&id.get()).cloned())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut store = self.lock()?;
        store.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(store.next_id),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(product.id.get(), product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, ProductRepositoryError> {
        let mut store = self.lock()?;
        let Some(slot) = store.rows.get_mut(&product.id.get()) else {
            return Err(ProductRepositoryError::query("record not found"));
        };
        let mut refreshed = product.clone();
        refreshed.updated_at = Utc::now();
        *slot = refreshed.clone();
        Ok(refreshed)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, ProductRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.rows.remove(&id.get()).is_some())
    }
}
