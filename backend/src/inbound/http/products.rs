//! Product resource HTTP handlers.
//!
//! ```text
//! GET    /products/        List all products
//! POST   /products/        Create a product
//! GET    /products/{id}/   Fetch one product
//! PUT    /products/{id}/   Update a product (partial overwrite)
//! DELETE /products/{id}/   Delete a product
//! ```
//!
//! Create and update accept untyped JSON field-mappings; validation and
//! response shaping are delegated to the domain service. Validation
//! failures answer 400 with a field-name to list-of-messages body, missing
//! resources answer 404 with `{ "error": "Product not found." }`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::ports::{CreateProductResponse, DeleteProductResponse, UpdateProductResponse};
use crate::domain::{ProductId, ProductRepresentation, ValidationErrors};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ConfirmationSchema, ErrorSchema, ResourceErrorSchema};
use crate::inbound::http::state::HttpState;

/// Message returned when a product lookup misses.
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";
/// Message returned after a successful delete.
pub const PRODUCT_DELETED: &str = "Product deleted successfully.";

fn not_found_response() -> HttpResponse {
    HttpResponse::NotFound().json(ResourceErrorSchema::new(PRODUCT_NOT_FOUND))
}

/// List all products.
#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All product records", body = [ProductRepresentation]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products/")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProductRepresentation>>> {
    let products = state.products_query.list_products().await?;
    Ok(web::Json(products))
}

/// Create a product from an untyped field-mapping.
#[utoipa::path(
    post,
    path = "/products/",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Created product", body = ProductRepresentation),
        (status = 400, description = "Validation failure", body = ValidationErrors),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products/")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    match state.products.create_product(payload.into_inner()).await? {
        CreateProductResponse::Created(product) => Ok(HttpResponse::Created().json(product)),
        CreateProductResponse::Invalid(errors) => Ok(HttpResponse::BadRequest().json(errors)),
    }
}

/// Fetch one product by identifier.
#[utoipa::path(
    get,
    path = "/products/{id}/",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product record", body = ProductRepresentation),
        (status = 404, description = "No such product", body = ResourceErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}/")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    match state.products_query.get_product(id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Ok(not_found_response()),
    }
}

/// Update a product with partial-overwrite semantics.
///
/// Submitted fields replace the stored values; omitted fields are preserved.
#[utoipa::path(
    put,
    path = "/products/{id}/",
    params(("id" = i32, Path, description = "Product identifier")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Updated product", body = ProductRepresentation),
        (status = 400, description = "Validation failure", body = ValidationErrors),
        (status = 404, description = "No such product", body = ResourceErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{id}/")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    match state
        .products
        .update_product(id, payload.into_inner())
        .await?
    {
        UpdateProductResponse::Updated(product) => Ok(HttpResponse::Ok().json(product)),
        UpdateProductResponse::Invalid(errors) => Ok(HttpResponse::BadRequest().json(errors)),
        UpdateProductResponse::NotFound => Ok(not_found_response()),
    }
}

/// Delete a product by identifier.
///
/// Not idempotent in result shape: deleting the same identifier twice
/// answers 404 the second time.
#[utoipa::path(
    delete,
    path = "/products/{id}/",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 204, description = "Product removed", body = ConfirmationSchema),
        (status = 404, description = "No such product", body = ResourceErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}/")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    match state.products.delete_product(id).await? {
        DeleteProductResponse::Deleted => {
            Ok(HttpResponse::NoContent().json(ConfirmationSchema::new(PRODUCT_DELETED)))
        }
        DeleteProductResponse::NotFound => Ok(not_found_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{MockProductsCommand, MockProductsQuery};
    use crate::domain::serializer::ProductRepresentation;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn representation(id: i32, name: &str, price: f64) -> ProductRepresentation {
        ProductRepresentation {
            id,
            name: name.to_owned(),
            description: None,
            price,
            created_at: "2026-08-06T00:00:00+00:00".to_owned(),
            updated_at: "2026-08-06T00:00:00+00:00".to_owned(),
        }
    }

    fn state(command: MockProductsCommand, query: MockProductsQuery) -> HttpState {
        HttpState::new(Arc::new(command), Arc::new(query))
    }

    async fn call(
        state: HttpState,
        request: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_products)
                .service(create_product)
                .service(get_product)
                .service(update_product)
                .service(delete_product),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[actix_web::test]
    async fn list_answers_ok_with_array_body() {
        let mut query = MockProductsQuery::new();
        query
            .expect_list_products()
            .returning(|| Ok(vec![representation(1, "Pen", 1.5)]));

        let response = call(
            state(MockProductsCommand::new(), query),
            actix_test::TestRequest::get().uri("/products/"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([{
            "id": 1,
            "name": "Pen",
            "description": null,
            "price": 1.5,
            "createdAt": "2026-08-06T00:00:00+00:00",
            "updatedAt": "2026-08-06T00:00:00+00:00"
        }]));
    }

    #[actix_web::test]
    async fn create_answers_created_on_success() {
        let mut command = MockProductsCommand::new();
        command.expect_create_product().returning(|_| {
            Ok(CreateProductResponse::Created(representation(
                3, "Pen", 1.5,
            )))
        });

        let response = call(
            state(command, MockProductsQuery::new()),
            actix_test::TestRequest::post()
                .uri("/products/")
                .set_json(json!({ "name": "Pen", "price": 1.5 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("id").and_then(Value::as_i64), Some(3));
    }

    #[actix_web::test]
    async fn create_answers_bad_request_with_field_errors() {
        let mut command = MockProductsCommand::new();
        command.expect_create_product().returning(|_| {
            let mut errors = ValidationErrors::default();
            errors.add("name", "This field is required.");
            Ok(CreateProductResponse::Invalid(errors))
        });

        let response = call(
            state(command, MockProductsQuery::new()),
            actix_test::TestRequest::post()
                .uri("/products/")
                .set_json(json!({ "price": 1.5 })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "name": ["This field is required."] }));
    }

    #[actix_web::test]
    async fn get_answers_not_found_envelope_for_unknown_id() {
        let mut query = MockProductsQuery::new();
        query.expect_get_product().returning(|_| Ok(None));

        let response = call(
            state(MockProductsCommand::new(), query),
            actix_test::TestRequest::get().uri("/products/42/"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "error": PRODUCT_NOT_FOUND }));
    }

    #[rstest]
    #[case(UpdateProductResponse::Updated(representation(1, "Pen", 2.0)), StatusCode::OK)]
    #[case(UpdateProductResponse::NotFound, StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn update_maps_outcomes_to_statuses(
        #[case] outcome: UpdateProductResponse,
        #[case] status: StatusCode,
    ) {
        let mut command = MockProductsCommand::new();
        command
            .expect_update_product()
            .returning(move |_, _| Ok(outcome.clone()));

        let response = call(
            state(command, MockProductsQuery::new()),
            actix_test::TestRequest::put()
                .uri("/products/1/")
                .set_json(json!({ "price": 2.0 })),
        )
        .await;

        assert_eq!(response.status(), status);
    }

    #[actix_web::test]
    async fn update_answers_bad_request_with_field_errors() {
        let mut command = MockProductsCommand::new();
        command.expect_update_product().returning(|_, _| {
            let mut errors = ValidationErrors::default();
            errors.add("price", "A valid number is required.");
            Ok(UpdateProductResponse::Invalid(errors))
        });

        let response = call(
            state(command, MockProductsQuery::new()),
            actix_test::TestRequest::put()
                .uri("/products/1/")
                .set_json(json!({ "price": "free" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "price": ["A valid number is required."] }));
    }

    #[actix_web::test]
    async fn delete_answers_no_content_then_not_found() {
        let mut command = MockProductsCommand::new();
        let mut outcomes = vec![
            DeleteProductResponse::NotFound,
            DeleteProductResponse::Deleted,
        ];
        command
            .expect_delete_product()
            .returning(move |_| Ok(outcomes.pop().unwrap_or(DeleteProductResponse::NotFound)));
        let state = state(command, MockProductsQuery::new());

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(delete_product),
        )
        .await;

        let first = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/products/1/")
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/products/1/")
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(second).await;
        assert_eq!(body, json!({ "error": PRODUCT_NOT_FOUND }));
    }

    #[actix_web::test]
    async fn storage_failures_surface_as_service_unavailable() {
        let mut query = MockProductsQuery::new();
        query
            .expect_list_products()
            .returning(|| Err(Error::service_unavailable("repository unavailable")));

        let response = call(
            state(MockProductsCommand::new(), query),
            actix_test::TestRequest::get().uri("/products/"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("service_unavailable")
        );
    }
}
