use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    let router = Router::new()
        .route("/", get(handlers::hello))
        // Items
        .route("/items", get(handlers::list_items))
        .route(
            "/items",
            post(handlers::create_item).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/items/:id", get(handlers::get_item))
        .route("/search", get(handlers::search_items))
        // Images
        .route("/image/:name", get(handlers::get_image));

    router
        .layer(cors_layer(&state.config.server.front_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow exactly one front-end origin, without credentials.
fn cors_layer(front_url: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = match HeaderValue::from_str(front_url) {
        Ok(value) => vec![value],
        Err(_) => {
            tracing::warn!(front_url, "Invalid CORS origin, cross-origin requests disabled");
            Vec::new()
        }
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
