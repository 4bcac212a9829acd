//! File-backed record source.

use super::{RecordSource, SourceError};
use crate::record::{LogRecord, ParseRecordError};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A restartable source over a log file.
///
/// The whole file is read and parsed when the source is opened, one record
/// per line, blank lines ignored. A line that fails to parse aborts the
/// open with the offending line number.
#[derive(Debug, Clone)]
pub struct FileSource {
    records: Vec<LogRecord>,
    pos: usize,
}

impl FileSource {
    /// Opens and parses a log file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(LoadError::Io)?;

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(LoadError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            let record = line.parse().map_err(|err| LoadError::Parse {
                line: index + 1,
                err,
            })?;
            records.push(record);
        }

        tracing::debug!(path = %path.display(), records = records.len(), "Loaded log file");

        Ok(Self { records, pos: 0 })
    }

    /// Returns the number of records loaded from the file.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the file held no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for FileSource {
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

/// Errors from opening a log file.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A line could not be parsed as a record. Line numbers start at 1.
    Parse {
        line: usize,
        err: ParseRecordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read log file: {}", e),
            LoadError::Parse { line, err } => write!(f, "bad record on line {}: {}", line, err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_open_and_iterate() {
        let file = write_log("2011 03 15 02 10 200\n2011 03 15 05 45 404\n");
        let mut source = FileSource::open(file.path()).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(source.next_record().unwrap().hour, 2);
        assert_eq!(source.next_record().unwrap().hour, 5);
        assert!(!source.has_next());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let file = write_log("\n2011 03 15 02 10 200\n\n");
        let source = FileSource::open(file.path()).unwrap();

        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let file = write_log("2011 03 15 02 10 200\nnot a record\n");
        let err = FileSource::open(file.path()).unwrap_err();

        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileSource::open("/nonexistent/weblog.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_restart_rewinds() {
        let file = write_log("2011 03 15 02 10 200\n");
        let mut source = FileSource::open(file.path()).unwrap();

        source.next_record().unwrap();
        assert!(!source.has_next());

        source.restart().unwrap();
        assert!(source.has_next());
    }
}
