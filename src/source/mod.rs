//! Record sources.
//!
//! A source hands out log records one at a time, forward-only. Each
//! accumulation pass of the analyzer drains its source completely; whether
//! a drained source can be rewound for another pass is an explicit
//! capability, not an assumption.

pub mod file;
pub mod memory;

pub use file::*;
pub use memory::*;

use crate::record::LogRecord;
use std::fmt;

/// A forward-only sequence of log records.
///
/// Contract: call `has_next` before `next_record`; asking for a record
/// past the end is a caller bug and yields [`SourceError::Exhausted`].
pub trait RecordSource {
    /// Returns true if at least one record remains.
    fn has_next(&self) -> bool;

    /// Produces the next record, advancing the source.
    fn next_record(&mut self) -> Result<LogRecord, SourceError>;

    /// Whether this source can be rewound to its first record.
    fn supports_restart(&self) -> bool {
        false
    }

    /// Rewinds the source so the next pass sees every record again.
    fn restart(&mut self) -> Result<(), SourceError> {
        Err(SourceError::RestartUnsupported)
    }
}

/// Errors from misusing a record source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// `next_record` was called with no records remaining.
    Exhausted,
    /// `restart` was called on a single-pass source.
    RestartUnsupported,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Exhausted => write!(f, "record source is exhausted"),
            SourceError::RestartUnsupported => {
                write!(f, "record source does not support restart")
            }
        }
    }
}

impl std::error::Error for SourceError {}
