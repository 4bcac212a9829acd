//! In-memory record source.

use super::{RecordSource, SourceError};
use crate::record::LogRecord;

/// A restartable source over an owned batch of records.
///
/// Yields records in the order they were given. Mainly used for tests and
/// for analyzing records that were produced programmatically.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<LogRecord>,
    pos: usize,
}

impl MemorySource {
    /// Creates a source over the given records.
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records, pos: 0 }
    }

    /// Returns the total number of records, consumed or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the source was created over zero records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends another batch of records.
    ///
    /// A drained source given more records becomes iterable again and
    /// yields just the new batch; a restart replays everything.
    pub fn extend(&mut self, records: impl IntoIterator<Item = LogRecord>) {
        self.records.extend(records);
    }
}

impl From<Vec<LogRecord>> for MemorySource {
    fn from(records: Vec<LogRecord>) -> Self {
        Self::new(records)
    }
}

impl RecordSource for MemorySource {
    fn has_next(&self) -> bool {
        self.pos < self.records.len()
    }

    fn next_record(&mut self) -> Result<LogRecord, SourceError> {
        let record = self
            .records
            .get(self.pos)
            .copied()
            .ok_or(SourceError::Exhausted)?;
        self.pos += 1;
        Ok(record)
    }

    fn supports_restart(&self) -> bool {
        true
    }

    fn restart(&mut self) -> Result<(), SourceError> {
        self.pos = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<LogRecord> {
        vec![
            LogRecord::new(2011, 3, 15, 2, 10, 200),
            LogRecord::new(2011, 3, 15, 5, 45, 404),
        ]
    }

    #[test]
    fn test_yields_records_in_order() {
        let mut source = MemorySource::new(batch());

        assert!(source.has_next());
        assert_eq!(source.next_record().unwrap().hour, 2);
        assert_eq!(source.next_record().unwrap().hour, 5);
        assert!(!source.has_next());
    }

    #[test]
    fn test_next_past_end_is_exhausted() {
        let mut source = MemorySource::new(vec![]);

        assert!(!source.has_next());
        assert_eq!(source.next_record().unwrap_err(), SourceError::Exhausted);
    }

    #[test]
    fn test_extend_revives_drained_source() {
        let mut source = MemorySource::new(batch());
        while source.has_next() {
            source.next_record().unwrap();
        }

        source.extend(vec![LogRecord::new(2011, 3, 16, 9, 0, 200)]);
        assert!(source.has_next());
        assert_eq!(source.next_record().unwrap().hour, 9);
        assert!(!source.has_next());
    }

    #[test]
    fn test_restart_rewinds() {
        let mut source = MemorySource::new(batch());
        while source.has_next() {
            source.next_record().unwrap();
        }

        assert!(source.supports_restart());
        source.restart().unwrap();
        assert!(source.has_next());
        assert_eq!(source.next_record().unwrap().hour, 2);
    }
}
