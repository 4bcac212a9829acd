//! The aggregation engine.
//!
//! A [`LogAnalyzer`] is bound to one record source and accumulates access
//! counts from it: per-hour totals, per-hour successes, and per-day totals.
//! Counters belong exclusively to the analyzer; callers read them through
//! borrowed views and the query methods, never mutate them directly.

use super::stats;
use crate::record::LogRecord;
use crate::source::{RecordSource, SourceError};
use std::fmt;

/// Sentinel returned by the hour queries before any record has been
/// accumulated. All-zero counters alone do not mean "never analyzed":
/// a pass over a quiet period legitimately leaves every bucket at zero.
pub const NOT_ANALYZED: i32 = -1;

/// Accumulates access statistics from a stream of log records.
///
/// Every accumulation pass drains the source. The analyzer never rewinds
/// it: running a second pass on an already-drained source is a no-op, so
/// callers wanting several passes over the same data must restart the
/// source in between (see [`LogAnalyzer::restart_source`]). Passes add to
/// the existing counters; nothing is ever reset or decremented.
pub struct LogAnalyzer<S> {
    hour_counts: [u64; 24],
    hour_success_counts: [u64; 24],
    daily_counts: [u64; 31],
    /// True once any pass has consumed at least one record.
    analyzed: bool,
    source: S,
}

impl<S: RecordSource> LogAnalyzer<S> {
    /// Creates an analyzer bound to a record source, all counters zero.
    pub fn new(source: S) -> Self {
        Self {
            hour_counts: [0; 24],
            hour_success_counts: [0; 24],
            daily_counts: [0; 31],
            analyzed: false,
            source,
        }
    }

    /// Counts every record by hour of day.
    pub fn analyze_hourly(&mut self) -> Result<(), AnalyzeError> {
        self.hourly_pass(|_| true)?;
        tracing::debug!("Hourly pass complete");
        Ok(())
    }

    /// Counts successful records (status 200) by hour of day.
    pub fn analyze_hourly_successes(&mut self) -> Result<(), AnalyzeError> {
        while self.source.has_next() {
            let record = self.source.next_record()?;
            self.analyzed = true;
            let hour = check_hour(record.hour)?;
            if record.is_success() {
                self.hour_success_counts[hour] += 1;
            }
        }
        tracing::debug!("Success pass complete");
        Ok(())
    }

    /// Counts by hour only the records from one calendar date.
    ///
    /// A pass in which nothing matches is a valid outcome: the counters
    /// are simply left as they were.
    pub fn analyze_hourly_for_date(
        &mut self,
        day: u32,
        month: u32,
        year: u32,
    ) -> Result<(), AnalyzeError> {
        self.hourly_pass(|r| r.year == year && r.month == month && r.day == day)?;
        tracing::debug!(day, month, year, "Filtered hourly pass complete");
        Ok(())
    }

    /// Counts every record by day of month.
    pub fn analyze_daily(&mut self) -> Result<(), AnalyzeError> {
        while self.source.has_next() {
            let record = self.source.next_record()?;
            self.analyzed = true;
            let day = record.day;
            if day == 0 || day > 31 {
                return Err(AnalyzeError::DayOutOfRange(day));
            }
            self.daily_counts[day as usize - 1] += 1;
        }
        tracing::debug!("Daily pass complete");
        Ok(())
    }

    /// Drains the source into `hour_counts`, counting records accepted by
    /// `matches`. Hours are validated for every consumed record, matched
    /// or not; a bad record aborts the pass and earlier increments stay.
    fn hourly_pass(&mut self, matches: impl Fn(&LogRecord) -> bool) -> Result<(), AnalyzeError> {
        while self.source.has_next() {
            let record = self.source.next_record()?;
            self.analyzed = true;
            let hour = check_hour(record.hour)?;
            if matches(&record) {
                self.hour_counts[hour] += 1;
            }
        }
        Ok(())
    }

    /// Rewinds the source for another pass, if it supports restarting.
    pub fn restart_source(&mut self) -> Result<(), SourceError> {
        self.source.restart()
    }

    /// Mutable access to the underlying source, e.g. to feed an in-memory
    /// source another batch between passes. The counters themselves are
    /// never handed out mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    // === Counter views ===

    /// Per-hour access counts, index = hour of day.
    pub fn hour_counts(&self) -> &[u64; 24] {
        &self.hour_counts
    }

    /// Per-hour successful-access counts, index = hour of day.
    pub fn hour_success_counts(&self) -> &[u64; 24] {
        &self.hour_success_counts
    }

    /// Per-day access counts, index = day of month - 1.
    pub fn daily_counts(&self) -> &[u64; 31] {
        &self.daily_counts
    }

    // === Derived statistics ===

    /// Total number of accesses counted by the hourly passes.
    pub fn total_accesses(&self) -> u64 {
        stats::total(&self.hour_counts)
    }

    /// Hour with the most accesses, earliest hour on ties.
    /// [`NOT_ANALYZED`] before any record has been accumulated.
    pub fn busiest_hour(&self) -> i32 {
        if !self.analyzed {
            return NOT_ANALYZED;
        }
        stats::busiest_hour(&self.hour_counts) as i32
    }

    /// Hour with the fewest accesses, earliest hour on ties.
    /// [`NOT_ANALYZED`] before any record has been accumulated.
    pub fn quietest_hour(&self) -> i32 {
        if !self.analyzed {
            return NOT_ANALYZED;
        }
        stats::quietest_hour(&self.hour_counts) as i32
    }

    /// Starting hour of the busiest two-consecutive-hour window,
    /// overlapping windows, earliest start on ties.
    /// [`NOT_ANALYZED`] before any record has been accumulated.
    pub fn busiest_two_hour_window(&self) -> i32 {
        if !self.analyzed {
            return NOT_ANALYZED;
        }
        stats::busiest_two_hour_window(&self.hour_counts) as i32
    }
}

fn check_hour(hour: u32) -> Result<usize, AnalyzeError> {
    if hour > 23 {
        return Err(AnalyzeError::HourOutOfRange(hour));
    }
    Ok(hour as usize)
}

/// Errors from an accumulation pass.
///
/// An out-of-range field is a contract violation by whatever produced the
/// record; the pass stops at the bad record and increments made before it
/// are kept. Accumulation is not transactional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeError {
    /// A record's hour was outside 0..=23.
    HourOutOfRange(u32),
    /// A record's day was outside 1..=31.
    DayOutOfRange(u32),
    /// The source violated its own contract mid-pass.
    Source(SourceError),
}

impl From<SourceError> for AnalyzeError {
    fn from(err: SourceError) -> Self {
        AnalyzeError::Source(err)
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::HourOutOfRange(hour) => {
                write!(f, "record hour {} is outside 0..=23", hour)
            }
            AnalyzeError::DayOutOfRange(day) => {
                write!(f, "record day {} is outside 1..=31", day)
            }
            AnalyzeError::Source(err) => write!(f, "record source failed: {}", err),
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzeError::Source(err) => Some(err),
            _ => None,
        }
    }
}
