use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{evaluate, health};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_seconds);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route(
            "/api/v1/add-even",
            get(evaluate::add_even_query).post(evaluate::add_even),
        )
        .route("/api/v1/sum-even", post(evaluate::sum_even))
        .route(
            "/api/v1/check",
            get(evaluate::run_configured_check).post(evaluate::run_check),
        )
        .fallback(evaluate::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(timeout))
}
