//! Log record structure

use super::severity::Severity;
use serde::Serialize;
use std::fmt;

/// Portion of `path` after its final `/`, or all of `path` when it has none.
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// An immutable log record.
///
/// The call-site file is reduced to its basename on construction, so a
/// record never carries a path separator in `file`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogRecord {
    level: Severity,
    file: String,
    function: String,
    message: String,
}

impl LogRecord {
    pub fn new(
        level: Severity,
        file: impl AsRef<str>,
        function: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            file: basename(file.as_ref()).to_string(),
            function: function.into(),
            message: message.into(),
        }
    }

    #[inline]
    pub fn level(&self) -> Severity {
        self.level
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Canonical rendering followed by a single `\n`.
    pub fn render_line(&self) -> String {
        let mut line = self.to_string();
        line.push('\n');
        line
    }
}

impl fmt::Display for LogRecord {
    /// `[LEVEL] <basename> <function> - <message>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} - {}",
            self.level, self.file, self.function, self.message
        )
    }
}
