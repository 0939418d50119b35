//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when `SHELF_CORS_ORIGINS` is unset
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // SHELF_CORS_ORIGINS can be comma-separated list of origins, or "*" for any
    let cors = match std::env::var("SHELF_CORS_ORIGINS").ok() {
        Some(origins) if origins == "*" => CorsLayer::new().allow_origin(Any).allow_methods(Any),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
        }
        None => CorsLayer::new()
            .allow_origin(AllowOrigin::list(
                DEV_ORIGINS.into_iter().map(HeaderValue::from_static),
            ))
            .allow_methods(Any),
    };

    Router::new()
        .route("/books.json", get(handlers::list_books))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
