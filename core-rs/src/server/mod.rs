//! HTTP front end under `/lvc`
//!
//! - `POST /lvc/sparql` - JSON dispatch, always enabled
//! - `GET /lvc/web`, `POST /lvc/query`, `GET /lvc/test/{type}` - test routes,
//!   answered with 403 unless `debug && test_mode`

mod response;
mod routes;
mod web;

use crate::client::{TestGate, TestRunner, VivoClient};
use crate::settings::VivoConfig;
use axum::routing::{get, post};
use axum::{middleware, Router};

pub use routes::{QueryForm, SparqlDispatchBody};

/// Holds the configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host and port the socket binds to (e.g. `127.0.0.1:8000`)
    pub bind: String,
    /// Whether a permissive CORS layer is added
    pub cors: bool,
    /// VIVO connection and test-mode configuration
    pub vivo: VivoConfig,
}

#[derive(Clone)]
pub struct AppState {
    pub client: VivoClient,
    pub runner: TestRunner,
    pub gate: TestGate,
}

impl AppState {
    pub fn new(client: VivoClient, gate: TestGate) -> Self {
        Self {
            runner: TestRunner::new(client.clone(), gate),
            client,
            gate,
        }
    }

    pub fn from_config(config: &VivoConfig) -> Self {
        Self::new(VivoClient::new(config), TestGate::from_config(config))
    }
}

pub fn create_router(state: AppState) -> Router {
    let test_routes = Router::new()
        .route("/web", get(web::handle_web))
        .route("/query", post(routes::handle_query_form))
        .route("/test/{type}", get(routes::handle_test))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            routes::require_test_mode,
        ));

    let lvc = Router::new()
        .route("/sparql", post(routes::handle_sparql))
        .merge(test_routes);

    Router::new().nest("/lvc", lvc).with_state(state)
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config.vivo);
    let test_routes = state.gate.is_open();

    let app = create_router(state);
    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        vivo = %config.vivo.base_url,
        test_routes,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, exiting");
}
