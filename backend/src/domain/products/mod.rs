//! Product domain services.

mod service;

pub use service::ProductService;
