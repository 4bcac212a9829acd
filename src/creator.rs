//! Synthetic log creation.
//!
//! Produces random access-log files for demos and test fixtures. Entries
//! are sorted chronologically before writing, matching what a real
//! time-ordered server log looks like.

use crate::record::LogRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Year stamped on every generated record.
const YEAR: u32 = 2011;

/// Status codes a generated record can carry.
const STATUSES: [u16; 3] = [200, 403, 404];

/// Generates random log records and writes them to files.
pub struct LogCreator {
    rng: StdRng,
}

impl LogCreator {
    /// Creates a generator with an OS-seeded rng.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible fixtures.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates one random record.
    ///
    /// Days run 1..=28 to avoid days-per-month complexity; the status is
    /// drawn uniformly from 200/403/404.
    pub fn random_record(&mut self) -> LogRecord {
        LogRecord {
            year: YEAR,
            month: self.rng.gen_range(1..=12),
            day: self.rng.gen_range(1..=28),
            hour: self.rng.gen_range(0..24),
            minute: self.rng.gen_range(0..60),
            status: STATUSES[self.rng.gen_range(0..STATUSES.len())],
        }
    }

    /// Generates `entries` random records in chronological order.
    pub fn random_records(&mut self, entries: usize) -> Vec<LogRecord> {
        let mut records: Vec<_> = (0..entries).map(|_| self.random_record()).collect();
        records.sort();
        records
    }

    /// Writes a file of `entries` random records, one per line, sorted.
    pub fn create_file<P: AsRef<Path>>(&mut self, path: P, entries: usize) -> std::io::Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        for record in self.random_records(entries) {
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), entries, "Created synthetic log file");
        Ok(())
    }
}

impl Default for LogCreator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileSource;

    #[test]
    fn test_random_record_fields_in_domain() {
        let mut creator = LogCreator::with_seed(7);

        for _ in 0..500 {
            let record = creator.random_record();
            assert_eq!(record.year, 2011);
            assert!((1..=12).contains(&record.month));
            assert!((1..=28).contains(&record.day));
            assert!(record.hour < 24);
            assert!(record.minute < 60);
            assert!(STATUSES.contains(&record.status));
        }
    }

    #[test]
    fn test_every_status_occurs() {
        let mut creator = LogCreator::with_seed(7);
        let records = creator.random_records(500);

        for status in STATUSES {
            assert!(records.iter().any(|r| r.status == status));
        }
    }

    #[test]
    fn test_records_are_sorted() {
        let mut creator = LogCreator::with_seed(42);
        let records = creator.random_records(100);

        assert!(records.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_seeded_creation_is_deterministic() {
        let a = LogCreator::with_seed(9).random_records(50);
        let b = LogCreator::with_seed(9).random_records(50);

        assert_eq!(a, b);
    }

    #[test]
    fn test_created_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weblog.txt");

        LogCreator::with_seed(3).create_file(&path, 25).unwrap();
        let source = FileSource::open(&path).unwrap();

        assert_eq!(source.len(), 25);
    }

    #[test]
    fn test_zero_entries_gives_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        LogCreator::with_seed(3).create_file(&path, 0).unwrap();
        let source = FileSource::open(&path).unwrap();

        assert!(source.is_empty());
    }
}
