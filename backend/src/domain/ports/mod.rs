//! Ports connecting the domain to its adapters.
//!
//! Driven ports (repositories) are implemented by outbound adapters; driving
//! ports (queries and commands) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
mod product_repository;
mod products;

pub(crate) use macros::define_port_error;

pub use product_repository::{ProductRepository, ProductRepositoryError};
pub use products::{
    CreateProductResponse, DeleteProductResponse, ProductsCommand, ProductsQuery,
    UpdateProductResponse,
};

#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use products::{MockProductsCommand, MockProductsQuery};
