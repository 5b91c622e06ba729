//! Error types for the rate engine
//!
//! Comprehensive error taxonomy using thiserror

use crate::day::Day;
use thiserror::Error;

/// Ingestion-time errors. Any of them rejects the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("abbreviated day not present: {code}")]
    UnknownDayCode { code: String },

    #[error("malformed time range: {range:?}")]
    MalformedTimeRange { range: String },

    #[error("unknown timezone: {name}")]
    UnknownTimezone { name: String },
}

/// Query-time errors. Each one means there is no price for the window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("rates do not span multiple days")]
    CrossDayRequest,

    #[error("could not find rates for day {day}")]
    NoRatesForDay { day: Day },

    #[error("unavailable")]
    RateUnavailable,
}
