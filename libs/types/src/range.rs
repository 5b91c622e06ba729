//! Local time ranges
//!
//! Rate documents describe a window as `"HHMM-HHMM"` in the rule's own
//! timezone, e.g. `"0900-2100"`.

use crate::errors::IngestError;
use serde::{Deserialize, Serialize};

/// Largest accepted clock value; 2400 marks the end of the local day.
const MAX_CLOCK: u32 = 2400;

/// A local wall-clock reading, hour and minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalClock {
    pub hour: u32,
    pub minute: u32,
}

impl LocalClock {
    /// Minutes since local midnight. 2400 maps to 1440.
    pub fn minutes_from_midnight(&self) -> i64 {
        (self.hour * 60 + self.minute) as i64
    }
}

/// Parsed `"HHMM-HHMM"` window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: LocalClock,
    pub end: LocalClock,
}

impl TimeRange {
    /// Parse a `"HHMM-HHMM"` range.
    ///
    /// The string must split on `-` into exactly two tokens of ASCII digits.
    /// Hours and minutes come from dividing each value by 100.
    pub fn parse(range: &str) -> Result<Self, IngestError> {
        let malformed = || IngestError::MalformedTimeRange {
            range: range.to_string(),
        };

        let mut tokens = range.split('-');
        let (start, end) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(malformed()),
        };

        Ok(Self {
            start: parse_clock(start).ok_or_else(malformed)?,
            end: parse_clock(end).ok_or_else(malformed)?,
        })
    }
}

fn parse_clock(token: &str) -> Option<LocalClock> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = token.parse().ok()?;
    if value > MAX_CLOCK {
        return None;
    }
    let clock = LocalClock {
        hour: value / 100,
        minute: value % 100,
    };
    (clock.minute < 60).then_some(clock)
}
