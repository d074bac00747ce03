//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ProductService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselProductRepository, InMemoryProductRepository};

/// Build the HTTP state based on configuration.
///
/// Uses the Diesel-backed repository when a pool is available, otherwise the
/// in-memory store. Both the command and query ports are served by the same
/// service instance.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let repository = Arc::new(DieselProductRepository::new(pool.clone()));
            let service = Arc::new(ProductService::new(repository));
            HttpState::new(service.clone(), service)
        }
        None => {
            let repository = Arc::new(InMemoryProductRepository::new());
            let service = Arc::new(ProductService::new(repository));
            HttpState::new(service.clone(), service)
        }
    }
}

/// Dependency bundle for app assembly.
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared readiness/liveness state.
    pub health_state: web::Data<HealthState>,
    /// Shared handler port bundle.
    pub http_state: web::Data<HttpState>,
}

/// Assemble the application: state, tracing middleware, resource routes and
/// probes. Swagger UI is mounted in debug builds only.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_products)
        .service(create_product)
        .service(get_product)
        .service(update_product)
        .service(delete_product)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
