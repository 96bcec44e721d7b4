//! Criterion benchmarks for log_pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use log_pipeline::prelude::*;
use log_pipeline::RecordQueue;
use std::sync::Arc;

/// Console sink that discards output so benchmarks measure the pipeline only.
struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        black_box(record.render_line());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn started_manager(level: Severity) -> LogManager {
    let manager = LogManager::builder().level(level).console(NullAppender).build();
    manager.start();
    manager
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("submission");
    group.throughput(Throughput::Elements(1));

    let manager = started_manager(Severity::Trace5);

    group.bench_function("info", |b| {
        b.iter(|| {
            manager.log(
                black_box(Severity::Info),
                black_box("src/server/handler.rs"),
                black_box("handle"),
                black_box("Info message"),
            );
        });
    });

    group.bench_function("below_threshold", |b| {
        manager.set_level(Severity::Warn);
        b.iter(|| {
            manager.log(
                black_box(Severity::Trace3),
                black_box("src/server/handler.rs"),
                black_box("handle"),
                black_box("Filtered on the consumer"),
            );
        });
    });

    group.finish();
    manager.stop();
}

// ============================================================================
// Concurrent Submission Benchmarks
// ============================================================================

fn bench_concurrent_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_submission");

    let manager = Arc::new(started_manager(Severity::Info));

    group.bench_function("multi_thread_4", |b| {
        let manager = Arc::clone(&manager);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let manager = Arc::clone(&manager);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            manager.log(Severity::Info, "bench.rs", "worker", "Concurrent message");
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
    manager.stop();
}

// ============================================================================
// Record Benchmarks
// ============================================================================

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let record = LogRecord::new(
                black_box(Severity::Info),
                black_box("a/deeply/nested/source/path/module.rs"),
                black_box("function"),
                black_box("Test message"),
            );
            black_box(record)
        });
    });

    let record = LogRecord::new(Severity::Info, "src/module.rs", "function", "Test message");
    group.bench_function("render_line", |b| {
        b.iter(|| black_box(record.render_line()));
    });

    group.finish();
}

// ============================================================================
// Queue Benchmarks
// ============================================================================

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    group.throughput(Throughput::Elements(1));

    let queue: RecordQueue<u64> = RecordQueue::new();
    group.bench_function("push_pop", |b| {
        b.iter(|| {
            queue.push(black_box(1));
            black_box(queue.try_pop())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_submission,
    bench_concurrent_submission,
    bench_record,
    bench_queue
);
criterion_main!(benches);
