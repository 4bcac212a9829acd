//! Log record value type.
//!
//! Defines the structured form of one web-server access-log entry and its
//! line-based text format: six whitespace-separated integers,
//! `YYYY MM DD HH MM STATUS`.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One access-log entry.
///
/// A plain value: equality is field-by-field and the derived ordering is
/// chronological (year, month, day, hour, minute), with status as the final
/// component so records can be sorted for fixture files. Field domains are
/// not checked on construction; the analyzer validates them when it indexes
/// its counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogRecord {
    pub year: u32,

    /// Month of year, 1..=12.
    pub month: u32,

    /// Day of month, 1..=31.
    pub day: u32,

    /// Hour of day, 0..=23.
    pub hour: u32,

    /// Minute of hour, 0..=59.
    pub minute: u32,

    /// HTTP status code of the request (e.g. 200, 403, 404).
    pub status: u16,
}

impl LogRecord {
    /// Creates a record from raw field values.
    pub fn new(year: u32, month: u32, day: u32, hour: u32, minute: u32, status: u16) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            status,
        }
    }

    /// Creates a record from a UTC timestamp and a status code.
    pub fn from_datetime(when: DateTime<Utc>, status: u16) -> Self {
        Self {
            year: when.year() as u32,
            month: when.month(),
            day: when.day(),
            hour: when.hour(),
            minute: when.minute(),
            status,
        }
    }

    /// Returns true if the request completed successfully (status 200).
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04} {:02} {:02} {:02} {:02} {}",
            self.year, self.month, self.day, self.hour, self.minute, self.status
        )
    }
}

impl FromStr for LogRecord {
    type Err = ParseRecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ParseRecordError::FieldCount(fields.len()));
        }

        let number = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|_| ParseRecordError::InvalidNumber(field.to_string()))
        };

        Ok(Self {
            year: number(fields[0])?,
            month: number(fields[1])?,
            day: number(fields[2])?,
            hour: number(fields[3])?,
            minute: number(fields[4])?,
            status: number(fields[5])? as u16,
        })
    }
}

/// Errors from parsing one log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRecordError {
    /// The line did not have exactly six fields.
    FieldCount(usize),
    /// A field was not a non-negative integer.
    InvalidNumber(String),
}

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRecordError::FieldCount(n) => {
                write!(f, "expected 6 fields per log line, found {}", n)
            }
            ParseRecordError::InvalidNumber(field) => {
                write!(f, "field is not a valid number: {:?}", field)
            }
        }
    }
}

impl std::error::Error for ParseRecordError {}
