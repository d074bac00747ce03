//! Product serialization collaborator.
//!
//! Validates untyped JSON field-mappings into domain values and converts
//! domain values into the external wire representation. Validation failures
//! are reported as a field-name to list-of-messages mapping; nothing in this
//! module touches storage.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{Product, ProductDraft};

/// Maximum accepted length for product names, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Fields accepted by the product schema.
const KNOWN_FIELDS: [&str; 3] = ["name", "description", "price"];

/// Key used for errors that cannot be attributed to a single field.
const NON_FIELD_ERRORS: &str = "nonFieldErrors";

const REQUIRED: &str = "This field is required.";
const NOT_NULLABLE: &str = "This field may not be null.";
const BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_NUMBER: &str = "A valid number is required.";
const NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";
const TOO_LONG: &str = "Ensure this field has no more than 255 characters.";
const UNKNOWN_FIELD: &str = "Unknown field.";
const NOT_AN_OBJECT: &str = "Invalid data. Expected a JSON object.";

/// Field-name to list-of-messages mapping describing a rejected payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// True when no message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against a field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// External representation of a product record.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRepresentation {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Pen")]
    pub name: String,
    /// Optional free-text description, serialized as `null` when absent.
    pub description: Option<String>,
    /// Unit price.
    #[schema(example = 1.5)]
    pub price: f64,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last modification timestamp, RFC 3339.
    pub updated_at: String,
}

/// Convert a product record to its external representation.
pub fn representation(product: &Product) -> ProductRepresentation {
    ProductRepresentation {
        id: product.id.get(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        created_at: product.created_at.to_rfc3339(),
        updated_at: product.updated_at.to_rfc3339(),
    }
}

/// Validate an untyped field-mapping into a creation draft.
///
/// All schema rules apply: `name` and `price` are required, `description` is
/// optional. On failure the accumulated field-error mapping is returned and
/// no partial draft escapes.
pub fn validate_new(data: &Value) -> Result<ProductDraft, ValidationErrors> {
    let map = require_object(data)?;
    let mut errors = ValidationErrors::default();
    reject_unknown_fields(map, &mut errors);

    let name = match map.get("name") {
        None => {
            errors.add("name", REQUIRED);
            None
        }
        Some(value) => parse_name(value, &mut errors),
    };
    let description = match map.get("description") {
        None => Some(None),
        Some(value) => parse_description(value, &mut errors),
    };
    let price = match map.get("price") {
        None => {
            errors.add("price", REQUIRED);
            None
        }
        Some(value) => parse_price(value, &mut errors),
    };

    match (name, description, price) {
        (Some(name), Some(description), Some(price)) if errors.is_empty() => Ok(ProductDraft {
            name,
            description,
            price,
        }),
        _ => Err(errors),
    }
}

/// Validate an untyped field-mapping against an existing record.
///
/// Partial-overwrite semantics: submitted fields replace the stored values,
/// omitted fields are preserved. Returns the merged record ready for
/// persistence; the identifier and audit timestamps are untouched here.
pub fn validate_update(existing: &Product, data: &Value) -> Result<Product, ValidationErrors> {
    let map = require_object(data)?;
    let mut errors = ValidationErrors::default();
    reject_unknown_fields(map, &mut errors);

    let mut merged = existing.clone();
    if let Some(value) = map.get("name") {
        if let Some(name) = parse_name(value, &mut errors) {
            merged.name = name;
        }
    }
    if let Some(value) = map.get("description") {
        if let Some(description) = parse_description(value, &mut errors) {
            merged.description = description;
        }
    }
    if let Some(value) = map.get("price") {
        if let Some(price) = parse_price(value, &mut errors) {
            merged.price = price;
        }
    }

    if errors.is_empty() { Ok(merged) } else { Err(errors) }
}

fn require_object(data: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    data.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::default();
        errors.add(NON_FIELD_ERRORS, NOT_AN_OBJECT);
        errors
    })
}

fn reject_unknown_fields(map: &Map<String, Value>, errors: &mut ValidationErrors) {
    for key in map.keys() {
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            errors.add(key.clone(), UNKNOWN_FIELD);
        }
    }
}

fn parse_name(value: &Value, errors: &mut ValidationErrors) -> Option<String> {
    if value.is_null() {
        errors.add("name", NOT_NULLABLE);
        return None;
    }
    let Some(raw) = value.as_str() else {
        errors.add("name", NOT_A_STRING);
        return None;
    };
    if raw.trim().is_empty() {
        errors.add("name", BLANK);
        return None;
    }
    if raw.chars().count() > MAX_NAME_LENGTH {
        errors.add("name", TOO_LONG);
        return None;
    }
    Some(raw.to_owned())
}

fn parse_description(value: &Value, errors: &mut ValidationErrors) -> Option<Option<String>> {
    if value.is_null() {
        return Some(None);
    }
    match value.as_str() {
        Some(raw) => Some(Some(raw.to_owned())),
        None => {
            errors.add("description", NOT_A_STRING);
            None
        }
    }
}

fn parse_price(value: &Value, errors: &mut ValidationErrors) -> Option<f64> {
    if value.is_null() {
        errors.add("price", NOT_NULLABLE);
        return None;
    }
    let Some(price) = value.as_f64() else {
        errors.add("price", NOT_A_NUMBER);
        return None;
    };
    if price < 0.0 {
        errors.add("price", NEGATIVE);
        return None;
    }
    Some(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;

    fn existing_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Pen".to_owned(),
            description: Some("Ballpoint".to_owned()),
            price: 1.5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn validate_new_accepts_full_payload() {
        let draft = validate_new(&json!({
            "name": "Pen",
            "description": "Ballpoint",
            "price": 1.5
        }))
        .expect("valid payload");

        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.description.as_deref(), Some("Ballpoint"));
        assert_eq!(draft.price, 1.5);
    }

    #[rstest]
    fn validate_new_accepts_missing_description() {
        let draft = validate_new(&json!({ "name": "Pen", "price": 0 })).expect("valid payload");
        assert!(draft.description.is_none());
        assert_eq!(draft.price, 0.0);
    }

    #[rstest]
    fn validate_new_reports_all_missing_required_fields() {
        let errors = validate_new(&json!({})).expect_err("missing fields");

        assert_eq!(errors.field("name"), Some(&[REQUIRED.to_owned()][..]));
        assert_eq!(errors.field("price"), Some(&[REQUIRED.to_owned()][..]));
    }

    #[rstest]
    #[case(json!({ "name": "", "price": 1.0 }), "name", BLANK)]
    #[case(json!({ "name": "   ", "price": 1.0 }), "name", BLANK)]
    #[case(json!({ "name": 5, "price": 1.0 }), "name", NOT_A_STRING)]
    #[case(json!({ "name": null, "price": 1.0 }), "name", NOT_NULLABLE)]
    #[case(json!({ "name": "Pen", "price": "cheap" }), "price", NOT_A_NUMBER)]
    #[case(json!({ "name": "Pen", "price": -0.5 }), "price", NEGATIVE)]
    #[case(json!({ "name": "Pen", "price": null }), "price", NOT_NULLABLE)]
    #[case(json!({ "name": "Pen", "price": 1.0, "description": 7 }), "description", NOT_A_STRING)]
    #[case(json!({ "name": "Pen", "price": 1.0, "colour": "red" }), "colour", UNKNOWN_FIELD)]
    fn validate_new_rejects_bad_fields(
        #[case] payload: Value,
        #[case] field: &str,
        #[case] message: &str,
    ) {
        let errors = validate_new(&payload).expect_err("invalid payload");
        assert_eq!(errors.field(field), Some(&[message.to_owned()][..]));
    }

    #[rstest]
    fn validate_new_rejects_over_long_name() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        let errors = validate_new(&json!({ "name": name, "price": 1.0 })).expect_err("too long");
        assert_eq!(errors.field("name"), Some(&[TOO_LONG.to_owned()][..]));
    }

    #[rstest]
    #[case(json!([1, 2, 3]))]
    #[case(json!("payload"))]
    #[case(json!(null))]
    fn validate_new_rejects_non_object_payloads(#[case] payload: Value) {
        let errors = validate_new(&payload).expect_err("not an object");
        assert_eq!(
            errors.field(NON_FIELD_ERRORS),
            Some(&[NOT_AN_OBJECT.to_owned()][..])
        );
    }

    #[rstest]
    fn validate_update_merges_submitted_fields_only() {
        let existing = existing_product();
        let merged = validate_update(&existing, &json!({ "price": 2.0 })).expect("valid update");

        assert_eq!(merged.price, 2.0);
        assert_eq!(merged.name, existing.name);
        assert_eq!(merged.description, existing.description);
        assert_eq!(merged.id, existing.id);
    }

    #[rstest]
    fn validate_update_clears_description_on_null() {
        let merged = validate_update(&existing_product(), &json!({ "description": null }))
            .expect("valid update");
        assert!(merged.description.is_none());
    }

    #[rstest]
    fn validate_update_rejects_invalid_replacement() {
        let errors = validate_update(&existing_product(), &json!({ "name": "" }))
            .expect_err("blank name");
        assert_eq!(errors.field("name"), Some(&[BLANK.to_owned()][..]));
    }

    #[rstest]
    fn validate_update_accepts_empty_mapping() {
        let existing = existing_product();
        let merged = validate_update(&existing, &json!({})).expect("no-op update");
        assert_eq!(merged, existing);
    }

    #[rstest]
    fn representation_uses_camel_case_and_rfc3339() {
        let product = existing_product();
        let value =
            serde_json::to_value(representation(&product)).expect("serialize representation");

        assert_eq!(value.get("id").and_then(Value::as_i64), Some(1));
        assert_eq!(value.get("name").and_then(Value::as_str), Some("Pen"));
        assert_eq!(value.get("price").and_then(Value::as_f64), Some(1.5));
        assert!(value.get("createdAt").and_then(Value::as_str).is_some());
        assert!(value.get("updatedAt").and_then(Value::as_str).is_some());
        assert!(value.get("created_at").is_none());
    }

    #[rstest]
    fn validation_errors_serialize_as_plain_mapping() {
        let mut errors = ValidationErrors::default();
        errors.add("name", REQUIRED);
        errors.add("name", BLANK);

        let value = serde_json::to_value(&errors).expect("serialize errors");
        assert_eq!(value, json!({ "name": [REQUIRED, BLANK] }));
    }
}
