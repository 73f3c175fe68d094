use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, instrument};

use crate::{
    app::AppState,
    parity::{runner::CaseRunner, types::CaseSet},
};

#[instrument(skip(state))]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.config.service_name,
        "version": state.config.service_version,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Ready only while the builtin assertions hold.
#[instrument(skip(state))]
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, StatusCode> {
    let report = CaseRunner::new(CaseSet::builtin()).run();

    if report.is_success() {
        Ok(Json(json!({
            "status": "ready",
            "service": state.config.service_name,
            "version": state.config.service_version,
            "checks": {
                "builtin_cases": "healthy",
                "passed": report.passed_cases
            },
            "timestamp": chrono::Utc::now().to_rfc3339()
        })))
    } else {
        error!(
            failed = report.failed_cases,
            "Builtin case set failed readiness check"
        );
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
