//! Product entity and associated value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
///
/// Identifiers are allocated by the storage adapter on insert and are
/// immutable for the lifetime of the record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Wrap a raw identifier.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Return the raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// One persisted product record.
///
/// The storage adapter exclusively owns persisted state; instances of this
/// type are point-in-time copies and carry no liveness guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name, non-blank, at most 255 characters.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price, finite and non-negative.
    pub price: f64,
    /// Record creation timestamp, store-assigned.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, store-maintained.
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a product.
///
/// Produced by the serializer from an untyped field-mapping; the identifier
/// and audit timestamps are assigned by the storage adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    /// Display name, already validated.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price, already validated.
    pub price: f64,
}
