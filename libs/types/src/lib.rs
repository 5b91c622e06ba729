//! Types library for the parking rates service
//!
//! This library provides the domain types shared by the rate engine and the
//! HTTP gateway, so both sides agree on day names, clock arithmetic and the
//! JSON shape of rate documents.
//!
//! # Modules
//! - `day`: Canonical weekday names and the abbreviated day-code table
//! - `army_time`: `HHMM` clock values derived from UTC instants
//! - `range`: `"HHMM-HHMM"` local time ranges
//! - `rate`: Rate documents (ingestion batches) and query requests
//! - `errors`: Error taxonomy

pub mod army_time;
pub mod day;
pub mod errors;
pub mod range;
pub mod rate;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::army_time::*;
    pub use crate::day::*;
    pub use crate::errors::*;
    pub use crate::range::*;
    pub use crate::rate::*;
}
