use asado::api::{handlers::api_routes, openapi::ApiDoc};
use asado::config::CONFIG;
use asado::{AsadoService, InMemoryCache, InMemoryLogging, InMemoryStorage};
use axum::{Router, http::header, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    // Initialize storage, logging and cache
    let cache = InMemoryCache::new();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let asado = Arc::new(
        AsadoService::new(storage, logging, cache)
            .with_settlement_epsilon(CONFIG.settlement_epsilon)
            .with_summary_ttl(Duration::from_secs(CONFIG.summary_cache_ttl_secs)),
    );

    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(asado))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!(
        "Server running at http://{} (settlement epsilon {})",
        addr, CONFIG.settlement_epsilon
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
