//! Multi-producer example
//!
//! Several threads log concurrently; a single consumer writes everything in
//! the order it was enqueued.
//!
//! Run with: cargo run --example multi_producer

use log_pipeline::prelude::*;
use log_pipeline::{info, loggable};
use std::thread;
use std::time::Duration;

struct Worker {
    name: String,
}

impl Loggable for Worker {
    fn logger_name(&self) -> &str {
        &self.name
    }
}

impl Worker {
    fn process(&self, item: usize) {
        loggable!(self, Severity::Debug, "processed item {}", item);
    }
}

fn main() {
    println!("=== Log Pipeline - Multi-Producer Example ===\n");

    let manager = get_manager();
    manager.set_level(Severity::Debug);
    manager.start();

    let handles: Vec<_> = (0..5)
        .map(|id| {
            thread::spawn(move || {
                let worker = Worker {
                    name: format!("Worker{}", id),
                };
                for item in 0..10 {
                    worker.process(item);
                    thread::sleep(Duration::from_millis(5));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker thread panicked");
        }
    }

    info!("5 workers logged 10 items each");
    manager.stop();

    println!("\n=== Example completed successfully! ===");
}
