//! Named loggers
//!
//! A type implementing [`Loggable`] submits records under its own name instead
//! of a source file name, which is useful for components whose identity says
//! more than the file they live in.

use super::manager::{get_manager, LogManager};
use super::severity::Severity;

pub trait Loggable {
    fn logger_name(&self) -> &str;

    /// Submit to the process-wide manager with `logger_name()` in the file slot.
    fn log_as(&self, level: Severity, function: &str, message: impl Into<String>) {
        self.log_to(get_manager(), level, function, message);
    }

    fn log_to(
        &self,
        manager: &LogManager,
        level: Severity,
        function: &str,
        message: impl Into<String>,
    ) {
        manager.log(level, self.logger_name(), function, message);
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn logger_name(&self) -> &str {
        (**self).logger_name()
    }
}
