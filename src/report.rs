//! Presentation layer.
//!
//! Renders counter state and derived statistics for the console and as
//! JSON. Everything here reads the analyzer's plain-data surface; nothing
//! feeds back into the core.

use crate::analyzer::LogAnalyzer;
use crate::source::RecordSource;
use serde::Serialize;

/// Prints the per-hour access counts.
pub fn print_hourly_counts(hour_counts: &[u64; 24]) {
    println!("Hr: Count");
    for (hour, count) in hour_counts.iter().enumerate() {
        println!("{:2}: {}", hour, count);
    }
}

/// Prints the per-hour successful-access counts.
pub fn print_success_counts(hour_success_counts: &[u64; 24]) {
    println!("Hr: Successes");
    for (hour, count) in hour_success_counts.iter().enumerate() {
        println!("{:2}: {}", hour, count);
    }
}

/// Prints the per-day access counts.
pub fn print_daily_counts(daily_counts: &[u64; 31]) {
    println!("Day: Count");
    for (day, count) in daily_counts.iter().enumerate() {
        println!("{:3}: {}", day + 1, count);
    }
}

/// Derived statistics in exportable form.
///
/// Hour fields are `-1` when the analyzer never accumulated a record.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_accesses: u64,
    pub busiest_hour: i32,
    pub quietest_hour: i32,
    pub busiest_two_hour_window: i32,
    /// When this summary was produced, RFC 3339.
    pub generated_at: String,
}

impl AnalysisSummary {
    /// Captures the derived statistics of an analyzer.
    pub fn capture<S: RecordSource>(analyzer: &LogAnalyzer<S>) -> Self {
        Self {
            total_accesses: analyzer.total_accesses(),
            busiest_hour: analyzer.busiest_hour(),
            quietest_hour: analyzer.quietest_hour(),
            busiest_two_hour_window: analyzer.busiest_two_hour_window(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Renders the summary as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Prints the summary as a console table.
    pub fn print(&self) {
        println!("Total accesses:          {}", self.total_accesses);
        println!("Busiest hour:            {}", self.busiest_hour);
        println!("Quietest hour:           {}", self.quietest_hour);
        println!("Busiest two-hour window: {}", self.busiest_two_hour_window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LogRecord;
    use crate::source::MemorySource;

    #[test]
    fn test_summary_captures_analyzer_state() {
        let records = vec![
            LogRecord::new(2011, 3, 15, 2, 0, 200),
            LogRecord::new(2011, 3, 15, 2, 30, 404),
            LogRecord::new(2011, 3, 15, 5, 0, 200),
        ];
        let mut analyzer = LogAnalyzer::new(MemorySource::new(records));
        analyzer.analyze_hourly().unwrap();

        let summary = AnalysisSummary::capture(&analyzer);

        assert_eq!(summary.total_accesses, 3);
        assert_eq!(summary.busiest_hour, 2);
        assert_eq!(summary.quietest_hour, 0);
    }

    #[test]
    fn test_summary_before_analysis_uses_sentinel() {
        let analyzer = LogAnalyzer::new(MemorySource::new(vec![]));
        let summary = AnalysisSummary::capture(&analyzer);

        assert_eq!(summary.total_accesses, 0);
        assert_eq!(summary.busiest_hour, -1);
        assert_eq!(summary.quietest_hour, -1);
        assert_eq!(summary.busiest_two_hour_window, -1);
    }

    #[test]
    fn test_summary_json_has_fields() {
        let analyzer = LogAnalyzer::new(MemorySource::new(vec![]));
        let json = AnalysisSummary::capture(&analyzer).to_json();

        assert!(json.contains("total_accesses"));
        assert!(json.contains("busiest_two_hour_window"));
        assert!(json.contains("generated_at"));
    }
}
