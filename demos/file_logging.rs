//! File logging example
//!
//! Mirrors every admitted record into a file next to standard output.
//!
//! Run with: cargo run --example file_logging

use log_pipeline::prelude::*;
use log_pipeline::{debug, info, warn};

fn main() -> Result<()> {
    println!("=== Log Pipeline - File Logging Example ===\n");

    let config = ManagerConfig::from_json(
        r#"{ "level": "info", "file": "application.log", "autostart": true }"#,
    )?;
    let manager = get_manager();
    manager.configure(&config);

    info!("Application started");
    debug!("Loading configuration...");
    info!("Configuration loaded successfully");
    warn!("Using default settings for some options");

    for i in 1..=5 {
        info!("Processing item {}/5", i);
        if i == 3 {
            warn!("Item 3 took longer than expected");
        }
    }

    info!("All operations completed");
    manager.stop();

    let metrics = manager.metrics();
    println!(
        "\nemitted: {}, filtered: {}, file errors: {}",
        metrics.emitted(),
        metrics.filtered(),
        metrics.file_errors()
    );
    println!("Check 'application.log' for the mirrored output");

    Ok(())
}
