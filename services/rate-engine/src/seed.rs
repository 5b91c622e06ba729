//! Seed document loading
//!
//! The rate table is seeded at startup from a JSON rate document on disk.
//! Failure to read, parse or ingest it is fatal for the caller.

use std::fs;
use std::path::Path;

use rate_types::errors::IngestError;
use rate_types::rate::RateBatch;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed rate: {0}")]
    Ingest(#[from] IngestError),
}

/// Read and decode a rate document.
pub fn load_seed(path: impl AsRef<Path>) -> Result<RateBatch, SeedError> {
    let contents = fs::read_to_string(path)?;
    let batch = serde_json::from_str(&contents)?;
    Ok(batch)
}
