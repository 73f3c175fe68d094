use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::Uri,
    response::Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    models::{AddEvenRequest, AddEvenResponse, CheckRequest, SumEvenRequest, SumEvenResponse},
    parity::types::CheckReport,
    services::evaluation_service,
};

// Extractor rejections are taken as `Result` so they render through `AppError`.

#[instrument(skip(params))]
pub async fn add_even_query(
    params: Result<Query<AddEvenRequest>, QueryRejection>,
) -> AppResult<Json<AddEvenResponse>> {
    let Query(params) = params?;
    Ok(Json(evaluation_service::evaluate(params)))
}

#[instrument(skip(payload))]
pub async fn add_even(
    payload: Result<Json<AddEvenRequest>, JsonRejection>,
) -> AppResult<Json<AddEvenResponse>> {
    let Json(request) = payload?;
    Ok(Json(evaluation_service::evaluate(request)))
}

#[instrument(skip(payload))]
pub async fn sum_even(
    payload: Result<Json<SumEvenRequest>, JsonRejection>,
) -> AppResult<Json<SumEvenResponse>> {
    let Json(request) = payload?;
    Ok(Json(evaluation_service::evaluate_many(request)?))
}

#[instrument(skip(payload))]
pub async fn run_check(
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> AppResult<Json<CheckReport>> {
    let Json(request) = payload?;
    info!("Running ad hoc check with {} cases", request.cases.len());

    let report = evaluation_service::check(request)?;
    if !report.is_success() {
        warn!(failed = report.failed_cases, "Ad hoc check had failures");
    }
    Ok(Json(report))
}

#[instrument(skip(state))]
pub async fn run_configured_check(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<CheckReport>> {
    let config = state.config.clone();
    let report = tokio::task::spawn_blocking(move || evaluation_service::check_configured(&config))
        .await
        .map_err(|e| AppError::Internal(format!("check task failed: {}", e)))??;
    Ok(Json(report))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
