//! Basic usage example
//!
//! Sets a threshold on the process-wide manager, starts the consumer and logs
//! through the call-site macros.
//!
//! Run with: cargo run --example basic_usage

use log_pipeline::prelude::*;
use log_pipeline::{debug, error, fatal, info, trace, trace2, warn};

fn main() {
    println!("=== Log Pipeline - Basic Usage Example ===\n");

    let manager = get_manager();
    manager.set_level(Severity::Trace);
    manager.start();

    println!("1. Logging at different levels (threshold TRACE):");
    trace!("This is a trace message");
    debug!("This is a debug message");
    info!("This is an info message");
    warn!("This is a warning message");
    error!("This is an error message");
    fatal!("This is a fatal message");
    trace2!("This one is above the threshold and never shows");

    // stop() returns once everything queued so far has been written
    manager.stop();

    println!("\n2. Raising the threshold to INFO:");
    manager.set_level(Severity::Info);
    manager.start();
    debug!("Debug message (hidden)");
    info!("Info message (visible)");
    warn!("Warning message (visible)");
    manager.stop();

    println!("\n=== Example completed successfully! ===");
}
