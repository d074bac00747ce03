//! Backend entry-point: wires the product REST endpoints and OpenAPI docs.

use std::env;
use std::net::SocketAddr;

use actix_web::{HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use product_api::inbound::http::health::HealthState;
use product_api::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use product_api::server::{AppDependencies, ServerConfig, build_app, build_http_state};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("PRODUCT_API_BIND")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid PRODUCT_API_BIND: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let migration_url = database_url.clone();
            tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
                .await
                .map_err(std::io::Error::other)?
                .map_err(std::io::Error::other)?;

            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; products are stored in memory (dev only)");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(build_http_state(&config));

    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;
    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });
        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());
        app
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<actix_web_prom::PrometheusMetrics> {
    actix_web_prom::PrometheusMetricsBuilder::new("product_api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}")))
}
