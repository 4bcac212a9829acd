//! accessmon - access-log statistics from the command line.
//!
//! Usage: `accessmon [LOGFILE]`. With no argument, a synthetic
//! `weblog.txt` is created in the current directory and analyzed.

use accessmon::analyzer::LogAnalyzer;
use accessmon::creator::LogCreator;
use accessmon::report::{self, AnalysisSummary};
use accessmon::source::FileSource;
use std::path::PathBuf;

/// Entries written when no log file is given.
const DEMO_ENTRIES: usize = 1000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("accessmon=info")),
        )
        .init();

    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let path = PathBuf::from("weblog.txt");
            println!("No log file given, creating {}...", path.display());
            LogCreator::new().create_file(&path, DEMO_ENTRIES)?;
            path
        }
    };

    let source = FileSource::open(&path)?;
    println!("Analyzing {} ({} records)", path.display(), source.len());
    println!();

    let mut analyzer = LogAnalyzer::new(source);

    // Each pass drains the source, so rewind it in between.
    analyzer.analyze_hourly()?;
    analyzer.restart_source()?;
    analyzer.analyze_daily()?;
    analyzer.restart_source()?;
    analyzer.analyze_hourly_successes()?;

    report::print_hourly_counts(analyzer.hour_counts());
    println!();
    report::print_success_counts(analyzer.hour_success_counts());
    println!();
    report::print_daily_counts(analyzer.daily_counts());
    println!();

    let summary = AnalysisSummary::capture(&analyzer);
    summary.print();
    println!();
    println!("{}", summary.to_json());

    Ok(())
}
