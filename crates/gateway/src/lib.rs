//! Contact Directory HTTP Gateway
//!
//! Thin axum layer over the directory engines: routing, status codes and the
//! OpenAPI document.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use directory_service_lib::config::DirectoryConfig;
use directory_service_lib::infra::Database;
use directory_service_lib::DirectoryServices;

use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router with request tracing.
pub fn build_app(state: AppState) -> Router {
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Connect to the database, apply migrations and serve HTTP.
pub async fn run_server(config: DirectoryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let services = DirectoryServices::new(&db);
    let app = build_app(AppState::new(services, db));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Contact directory listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
