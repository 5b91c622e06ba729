use crate::error::{AppError, RateError};
use crate::models::{RateResponse, StatusResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use rate_types::rate::{QueryRequest, RateBatch};
use std::time::Instant;

pub async fn put_rates(
    State(state): State<AppState>,
    payload: Result<Json<RateBatch>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    // 1. Decode body
    let Json(batch) = payload.map_err(|e| {
        state.metrics.record_put_error();
        AppError::BadRequest(e.body_text())
    })?;

    // 2. Replace the rate table
    state.table.ingest(&batch).map_err(|e| {
        state.metrics.record_put_error();
        AppError::from(e)
    })?;

    state.metrics.record_put_success();
    Ok(Json(StatusResponse::success("Successfully updated rates")))
}

pub async fn get_rate(
    State(state): State<AppState>,
    params: Result<Query<QueryRequest>, QueryRejection>,
) -> Result<Json<RateResponse>, RateError> {
    // 1. Decode query parameters
    let Query(request) = params.map_err(|e| {
        state.metrics.record_get_bad_request();
        AppError::BadRequest(e.body_text())
    })?;

    // 2. Price the window
    let started = Instant::now();
    let rate = state.table.query_request(&request).map_err(|e| {
        state.metrics.record_get_not_found();
        RateError::from(e)
    })?;

    state
        .metrics
        .record_get_success(started.elapsed().as_nanos() as u64);
    Ok(Json(RateResponse::success(rate)))
}
