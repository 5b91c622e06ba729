use rate_types::rate::PriceCents;
use serde::{Deserialize, Serialize};

/// Body of the health check and the rate replacement endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Body of the rate lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResponse {
    pub status: String,
    pub message: String,
    pub rate: PriceCents,
}

impl RateResponse {
    pub fn success(rate: PriceCents) -> Self {
        Self {
            status: "success".to_string(),
            message: "success retrieving rate".to_string(),
            rate,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            rate: 0,
        }
    }
}
