use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rate_types::errors::{IngestError, QueryError};
use thiserror::Error;

use crate::models::{RateResponse, StatusResponse};

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::Unavailable(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(StatusResponse::error(self.to_string()))).into_response()
    }
}

/// Error from the rate lookup endpoint. Same status mapping as [`AppError`],
/// but the body keeps the rate response shape with a zero rate.
#[derive(Debug)]
pub struct RateError(pub AppError);

impl From<AppError> for RateError {
    fn from(err: AppError) -> Self {
        RateError(err)
    }
}

impl From<QueryError> for RateError {
    fn from(err: QueryError) -> Self {
        RateError(err.into())
    }
}

impl IntoResponse for RateError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        (status, Json(RateResponse::error(self.0.to_string()))).into_response()
    }
}
