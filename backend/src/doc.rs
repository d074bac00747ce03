//! OpenAPI documentation surface.

use utoipa::OpenApi;

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::serializer::ProductRepresentation,
        crate::domain::serializer::ValidationErrors,
        crate::inbound::http::schemas::ErrorSchema,
        crate::inbound::http::schemas::ResourceErrorSchema,
        crate::inbound::http::schemas::ConfirmationSchema,
    )),
    tags(
        (name = "products", description = "Product resource"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
