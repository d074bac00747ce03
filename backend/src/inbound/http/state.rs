//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProductsCommand, ProductsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write-side port over the product resource.
    pub products: Arc<dyn ProductsCommand>,
    /// Read-side port over the product resource.
    pub products_query: Arc<dyn ProductsQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(products: Arc<dyn ProductsCommand>, products_query: Arc<dyn ProductsQuery>) -> Self {
        Self {
            products,
            products_query,
        }
    }
}
