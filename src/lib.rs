//! # Log Pipeline
//!
//! A process-wide, leveled, asynchronous logging facility for multithreaded
//! programs.
//!
//! ## Features
//!
//! - **Non-blocking producers**: `log()` only enqueues onto an unbounded queue
//! - **Single consumer**: one background thread filters and writes in FIFO order
//! - **Twelve levels**: `NONE` through `TRACE5`, with a global threshold
//! - **Two sinks**: standard output, mirrored into an optional file
//!
//! ```no_run
//! use log_pipeline::{get_manager, info, Severity};
//!
//! let manager = get_manager();
//! manager.set_level(Severity::Info);
//! manager.set_file("/tmp/app.log");
//! manager.start();
//!
//! info!("listening on port {}", 8080);
//!
//! manager.stop();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        get_manager, Appender, LogManager, LogManagerBuilder, LogRecord, Loggable,
        LoggerError, LoggerMetrics, ManagerConfig, Result, Severity,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use crate::core::{
    basename, get_manager, Appender, LogManager, LogManagerBuilder, LogRecord, Loggable,
    LoggerError, LoggerMetrics, ManagerConfig, RecordQueue, Result, Severity,
    CONSUMER_THREAD_NAME,
};
