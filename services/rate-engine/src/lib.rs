//! Rate Engine
//!
//! Maintains the in-memory table of weekly recurring parking rates and
//! prices concrete parking windows against it:
//! - Time normalization of local weekly windows to UTC army time
//! - Immutable per-weekday rate index snapshots
//! - Atomic snapshot replacement on ingestion
//! - First-match lookup for a start/end window
//!
//! # Architecture
//!
//! ```text
//!  RateBatch (seed file / PUT)
//!        │
//!   ┌────▼─────┐
//!   │Normalizer│  ← day codes, HHMM ranges, IANA zones → UTC windows
//!   └────┬─────┘
//!        │ built outside the lock
//!   ┌────▼─────┐
//!   │RateIndex │  ← Day → [WeekdayRule], insertion order
//!   └────┬─────┘
//!        │ Arc swap
//!   ┌────▼─────┐
//!   │RateTable │  ← query(start, end) → price
//!   └──────────┘
//! ```

pub mod clock;
pub mod index;
pub mod normalizer;
pub mod seed;
pub mod table;

pub use clock::{Clock, FixedClock, SystemClock};
pub use index::{RateIndex, WeekdayRule};
pub use seed::{load_seed, SeedError};
pub use table::RateTable;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
