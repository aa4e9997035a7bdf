//! Axum router — maps all URL paths to handlers.

use axum::{
    extract::DefaultBodyLimit,
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use crate::state::SharedState;
use crate::handlers::{
    playground::{playground_page, generate_submit},
    articles::{upload_articles, api_articles},
    api::{api_generate, export_candidates, health},
};

/// Build and return the full Axum router.
pub fn build_router(shared: SharedState) -> Router {
    let static_dir = shared.config.server.static_dir.clone();
    let upload_limit = shared.config.uploads.max_upload_bytes;

    Router::new()
        // Pages
        .route("/",         get(playground_page))
        .route("/generate", post(generate_submit))
        .route("/articles", post(upload_articles).layer(DefaultBodyLimit::max(upload_limit)))

        // API endpoints
        .route("/api/generate",  post(api_generate))
        .route("/api/articles",  get(api_articles))
        .route("/export/candidates.json", get(export_candidates))
        .route("/health",        get(health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
