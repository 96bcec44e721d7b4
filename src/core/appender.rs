//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A sink the consumer thread writes admitted records to.
///
/// Appenders are only ever driven from the consumer thread, so they need to be
/// `Send` but not `Sync`.
pub trait Appender: Send {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
