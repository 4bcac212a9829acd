//! accessmon - web-server access-log statistics.
//!
//! Aggregates structured access-log records into hourly and daily
//! counters and derives simple traffic statistics from them: total
//! accesses, busiest and quietest hour, busiest two-hour window.
//!
//! The [`analyzer`] module is the core; [`source`], [`creator`], and
//! [`report`] are the collaborators around it (where records come from,
//! how fixtures are made, how results are shown).

pub mod analyzer;
pub mod creator;
pub mod record;
pub mod report;
pub mod source;
