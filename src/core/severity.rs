//! Severity level definitions
//!
//! Levels ascend in verbosity: `None < Fatal < Error < ... < Trace5`. A record
//! is emitted when the manager's threshold is greater than or equal to the
//! record's severity, so a higher threshold lets more records through.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    #[default]
    None = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
    Trace1 = 7,
    Trace2 = 8,
    Trace3 = 9,
    Trace4 = 10,
    Trace5 = 11,
}

impl Severity {
    /// Every level, least verbose first.
    pub const ALL: [Severity; 12] = [
        Severity::None,
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
        Severity::Trace1,
        Severity::Trace2,
        Severity::Trace3,
        Severity::Trace4,
        Severity::Trace5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
            Severity::Trace1 => "TRACE1",
            Severity::Trace2 => "TRACE2",
            Severity::Trace3 => "TRACE3",
            Severity::Trace4 => "TRACE4",
            Severity::Trace5 => "TRACE5",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Severity::as_u8`]. Out-of-range values saturate to `Trace5`.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::None,
            1 => Severity::Fatal,
            2 => Severity::Error,
            3 => Severity::Warn,
            4 => Severity::Info,
            5 => Severity::Debug,
            6 => Severity::Trace,
            7 => Severity::Trace1,
            8 => Severity::Trace2,
            9 => Severity::Trace3,
            10 => Severity::Trace4,
            _ => Severity::Trace5,
        }
    }

    /// Whether a record at `level` passes when `self` is the threshold.
    #[inline]
    pub fn admits(self, level: Severity) -> bool {
        self >= level
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NONE" => Ok(Severity::None),
            "FATAL" | "SEVERE" => Ok(Severity::Fatal),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            "TRACE" => Ok(Severity::Trace),
            "TRACE1" => Ok(Severity::Trace1),
            "TRACE2" => Ok(Severity::Trace2),
            "TRACE3" => Ok(Severity::Trace3),
            "TRACE4" => Ok(Severity::Trace4),
            "TRACE5" => Ok(Severity::Trace5),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}
