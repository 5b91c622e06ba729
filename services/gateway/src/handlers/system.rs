use crate::models::StatusResponse;
use crate::state::AppState;
use axum::{Json, extract::State};
use std::collections::BTreeMap;

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::ok("rates app online"))
}

pub async fn metrics(State(state): State<AppState>) -> Json<BTreeMap<String, u64>> {
    Json(state.metrics.export())
}
