use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use even_adder::{
    app::{AppState, create_router},
    config::AppConfig,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> axum::Router {
    create_router(Arc::new(AppState {
        config: AppConfig::default(),
    }))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_check_works() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn readiness_runs_builtin_cases() {
    let (status, body) = get_json("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["builtin_cases"], "healthy");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, body) = get_json("/api/v1/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "No route for /api/v1/nothing");
}
