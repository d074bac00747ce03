//! Shared response body types and OpenAPI schemas.

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope emitted for domain failures (see [`crate::domain::Error`]).
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "internal_error")]
    pub code: String,
    /// Human-readable message.
    #[schema(example = "Internal server error")]
    pub message: String,
}

/// Body returned when a resource lookup misses: `{ "error": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceErrorSchema {
    /// Human-readable message.
    #[schema(example = "Product not found.")]
    pub error: String,
}

impl ResourceErrorSchema {
    /// Wrap a message in the not-found envelope.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Confirmation body for destructive operations: `{ "message": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfirmationSchema {
    /// Human-readable message.
    #[schema(example = "Product deleted successfully.")]
    pub message: String,
}

impl ConfirmationSchema {
    /// Wrap a message in the confirmation envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
