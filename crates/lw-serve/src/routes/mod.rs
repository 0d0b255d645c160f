pub mod error;
pub mod logs;

use crate::middleware::correlation::correlation_middleware;
use crate::{AppState, openapi, static_files};
use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(logs::router(state))
        .merge(openapi::router())
        .merge(static_files::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .route_layer(middleware::from_fn(correlation_middleware))
}
