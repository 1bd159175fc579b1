use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::config::config_model::DotEnvyConfig;
use crate::infrastructure::axum_http::{default_routers, routers};
use crate::infrastructure::memory::memory_connection::MemStoreSquad;

/// Builds the full route tree over an already-seeded store.
pub fn app(store: Arc<MemStoreSquad>) -> Router {
    Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/internet-plans",
            routers::internet_plans::routes(Arc::clone(&store)),
        )
        .nest(
            "/api/boda-bookings",
            routers::boda_bookings::routes(Arc::clone(&store)),
        )
        .nest(
            "/api/restaurants",
            routers::restaurants::routes(Arc::clone(&store)),
        )
        .nest(
            "/api/products",
            routers::products::routes(Arc::clone(&store)),
        )
        .nest("/api/jobs", routers::jobs::routes(Arc::clone(&store)))
        .merge(routers::users::routes(Arc::clone(&store)))
        .route("/api/health-check", get(default_routers::health_check))
}

pub async fn start(config: Arc<DotEnvyConfig>, store: Arc<MemStoreSquad>) -> Result<()> {
    let app = app(store)
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any), // TODO Add the domain later
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
