//! Console appender implementation

use crate::core::{Appender, LogRecord, Result};
use std::io::Write;

/// Writes the canonical line of each record to standard output.
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(record.render_line().as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
