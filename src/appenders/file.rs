//! File appender implementation
//!
//! The file is opened, appended to and closed for every record. No handle
//! outlives a single write, so each line is on disk as soon as `append`
//! returns and nothing needs flushing at shutdown.

use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    /// Build an appender for `path` without touching the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Zero-length the file at `path` (creating it if needed) and return an
    /// appender for it.
    pub fn truncate(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        File::create(&path).map_err(|e| {
            LoggerError::io_operation(
                "truncating log file",
                format!("cannot truncate '{}'", path.display()),
                e,
            )
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::file_appender(self.path.display().to_string(), e.to_string()))?;
        file.write_all(record.render_line().as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_truncate_empties_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("t.log");
        fs::write(&path, vec![b'x'; 10 * 1024]).unwrap();

        let appender = FileAppender::truncate(&path).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        assert_eq!(appender.path(), path.as_path());
    }

    #[test]
    fn test_append_writes_canonical_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("append.log");
        let mut appender = FileAppender::truncate(&path).unwrap();

        appender
            .append(&LogRecord::new(Severity::Info, "src/a.rs", "first", "one"))
            .unwrap();
        appender
            .append(&LogRecord::new(Severity::Error, "b.rs", "second", "two"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[INFO] a.rs first - one\n[ERROR] b.rs second - two\n");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut appender = FileAppender::new(temp_dir.path().join("missing").join("x.log"));

        let result = appender.append(&LogRecord::new(Severity::Info, "a.rs", "f", "m"));
        assert!(matches!(result, Err(LoggerError::FileAppenderError { .. })));
    }

    #[test]
    fn test_truncate_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileAppender::truncate(temp_dir.path().join("missing").join("x.log"));
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
