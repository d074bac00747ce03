//! Diesel row and changeset models for the products table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Product, ProductId};

use super::schema::products;

/// Queryable row for product records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row for new product records.
///
/// The identifier and audit timestamps are assigned by the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
}

/// Full-replacement changeset for an existing record.
///
/// `treat_none_as_null` makes a `None` description clear the column rather
/// than skip it.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ProductChangeset<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}
