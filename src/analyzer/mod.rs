//! Access-log aggregation and derived statistics.
//!
//! The [`LogAnalyzer`] owns the counters and populates them from a record
//! source; the functions in [`stats`] derive extrema from counter state
//! without mutating it.

pub mod log_analyzer;
pub mod stats;

pub use log_analyzer::*;
pub use stats::*;
