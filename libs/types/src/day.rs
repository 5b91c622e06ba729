//! Weekday names
//!
//! Rate documents list days with short codes (`mon`, `tues`, ...). Internally
//! every bucket and rule is keyed by the canonical [`Day`].

use crate::errors::IngestError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical weekday name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days, Monday first
    pub fn all() -> &'static [Day] {
        &[
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
            Day::Sunday,
        ]
    }

    /// Resolve an abbreviated day code as used in rate documents.
    ///
    /// Only the exact lowercase codes `mon`, `tues`, `wed`, `thurs`, `fri`,
    /// `sat` and `sun` are accepted.
    pub fn from_code(code: &str) -> Result<Self, IngestError> {
        match code {
            "mon" => Ok(Day::Monday),
            "tues" => Ok(Day::Tuesday),
            "wed" => Ok(Day::Wednesday),
            "thurs" => Ok(Day::Thursday),
            "fri" => Ok(Day::Friday),
            "sat" => Ok(Day::Saturday),
            "sun" => Ok(Day::Sunday),
            other => Err(IngestError::UnknownDayCode {
                code: other.to_string(),
            }),
        }
    }

    /// The abbreviated code for this day
    pub fn code(&self) -> &'static str {
        match self {
            Day::Monday => "mon",
            Day::Tuesday => "tues",
            Day::Wednesday => "wed",
            Day::Thursday => "thurs",
            Day::Friday => "fri",
            Day::Saturday => "sat",
            Day::Sunday => "sun",
        }
    }

    /// Full English name
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a comma-separated day list (`"mon,wed,sat"`) into canonical days.
///
/// Fails on the first unknown code; nothing is returned for the valid ones.
pub fn parse_day_codes(days: &str) -> Result<Vec<Day>, IngestError> {
    days.split(',').map(Day::from_code).collect()
}
