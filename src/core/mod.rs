//! Core pipeline types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_record;
pub mod loggable;
pub mod manager;
pub mod metrics;
pub mod record_queue;
pub mod severity;

pub use appender::Appender;
pub use config::ManagerConfig;
pub use error::{LoggerError, Result};
pub use log_record::{basename, LogRecord};
pub use loggable::Loggable;
pub use manager::{get_manager, LogManager, LogManagerBuilder, CONSUMER_THREAD_NAME};
pub use metrics::LoggerMetrics;
pub use record_queue::RecordQueue;
pub use severity::Severity;
