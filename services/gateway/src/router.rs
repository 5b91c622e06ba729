use crate::handlers::{rates, system};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/metrics", get(system::metrics))
        .route("/rates", put(rates::put_rates))
        .route("/rate", get(rates::get_rate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
