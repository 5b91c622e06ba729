//! Rate documents and query requests
//!
//! A [`RateBatch`] is both the seed document read at startup and the body of a
//! rate replacement request:
//!
//! ```json
//! {"rates": [{"days": "mon,tues", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}]}
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Price in the smallest currency unit. No conversion is ever applied.
pub type PriceCents = u32;

/// One human-authored recurring rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSpec {
    /// Comma-separated day codes, e.g. `"mon,wed,sat"`
    pub days: String,
    /// Local window, `"HHMM-HHMM"`
    pub times: String,
    /// IANA timezone name the window is expressed in
    pub tz: String,
    pub price: PriceCents,
}

/// A full set of rules. Ingesting it replaces every previous rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBatch {
    #[serde(default)]
    pub rates: Vec<RateSpec>,
}

impl RateBatch {
    pub fn new(rates: Vec<RateSpec>) -> Self {
        Self { rates }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// A concrete parking window to price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}
