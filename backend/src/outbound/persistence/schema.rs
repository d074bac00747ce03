//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Product catalogue table.
    ///
    /// The `id` column is the primary key (serial, store-assigned).
    products (id) {
        /// Primary key: store-assigned serial identifier.
        id -> Int4,
        /// Display name (max 255 characters).
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Unit price.
        price -> Float8,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
