//! Army time clock values
//!
//! A clock reading is flattened to a single number, `hours * 100 + minutes +
//! seconds / 3600`, always taken from the UTC clock. 14:30:00 becomes 1430.0.
//! Values above 2400 describe a window that continues past UTC midnight.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTC clock time in `HHMM` layout
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmyTime(f64);

impl ArmyTime {
    /// Added to an end clock that falls numerically before its start clock.
    pub const WRAP: f64 = 2400.0;

    /// Army time of an instant, read on the UTC clock.
    ///
    /// Sub-second precision is dropped.
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let utc = instant.with_timezone(&Utc);
        let hours = utc.hour() as f64;
        let minutes = utc.minute() as f64;
        let seconds = utc.second() as f64;
        Self(hours * 100.0 + minutes + seconds / 3600.0)
    }

    pub fn from_value(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// The same clock reading on the following day.
    pub fn wrapped(&self) -> Self {
        Self(self.0 + Self::WRAP)
    }

    /// Whether this value lies beyond the end of the day it started on.
    pub fn is_past_midnight(&self) -> bool {
        self.0 > Self::WRAP
    }
}

impl fmt::Display for ArmyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
