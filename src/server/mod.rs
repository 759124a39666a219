// HTTP server module
// JSON query endpoint for the web frontend, sharing the shell's answer service

mod handlers;

pub use handlers::{
    handle_query, health_check, metrics_today, ErrorResponse, QueryRequest, QueryResponse,
};

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::answer::AnswerService;

/// Questions are short; anything bigger than this is rejected before parsing
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnswerService>,
}

/// Build the router: `POST /query`, `GET /health`, `GET /metrics/today`
pub fn create_router(service: Arc<AnswerService>) -> Router {
    // The frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/query", post(handle_query))
        .route("/health", get(health_check))
        .route("/metrics/today", get(metrics_today))
        .with_state(AppState { service })
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve the query endpoint until the process is stopped
pub async fn serve(bind_address: &str, service: AnswerService) -> Result<()> {
    let addr: SocketAddr = bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", bind_address))?;

    if let Err(e) = service.store().ensure_schema() {
        tracing::warn!("Could not prepare data files: {:#}", e);
    }

    let app = create_router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Starting work item analyzer server on {}", addr);
    println!("Work Item Analyzer listening on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
