//! URL routing

use crate::config::{CorsOrigins, ServerConfig};
use crate::handlers;
use axum::{
    http::HeaderValue,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(config: &ServerConfig) -> Router {
    // The hello route answers every method on the exact path only
    let app_routes = Router::new().route("/hello", any(handlers::hello_world));

    let router = if config.app_prefix.is_empty() {
        Router::new().merge(app_routes)
    } else {
        Router::new().nest(&config.app_prefix, app_routes)
    };

    router
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(Arc::new(config.clone()))
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|s| s.parse::<HeaderValue>().ok()),
        ),
        CorsOrigins::Localhost => AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ]),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
