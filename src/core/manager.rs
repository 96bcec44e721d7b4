//! Process-wide log manager
//!
//! Producers call [`LogManager::log`], which only enqueues. A single consumer
//! thread, owned by the manager between [`LogManager::start`] and
//! [`LogManager::stop`], pops records in FIFO order, applies the global
//! threshold and writes admitted records to standard output and, when one is
//! configured, to the file sink.

use super::{
    appender::Appender,
    config::ManagerConfig,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    record_queue::RecordQueue,
    severity::Severity,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::{Condvar, Mutex, MutexGuard};
use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::{self, ThreadId};

static MANAGER: OnceLock<LogManager> = OnceLock::new();

/// Name given to the consumer thread.
pub const CONSUMER_THREAD_NAME: &str = "log-consumer";

/// Items travelling through the queue. `Shutdown` is the sentinel `stop`
/// enqueues to wake a consumer parked in `pop`.
enum Envelope {
    Record(LogRecord),
    Shutdown,
}

/// State shared between the controlling side and the consumer thread.
struct Shared {
    threshold: AtomicU8,
    running: AtomicBool,
    queue: RecordQueue<Envelope>,
    console: Mutex<Box<dyn Appender>>,
    // Path and enable flag live together so the consumer reads them as a pair.
    file: Mutex<Option<FileAppender>>,
    metrics: LoggerMetrics,
}

/// Consumer thread handles. At most one consumer exists at a time: a consumer
/// told to stop keeps draining up to its sentinel, and nobody spawns a new one
/// until it has been joined.
#[derive(Default)]
struct Lifecycle {
    active: Option<thread::JoinHandle<()>>,
    // Stopped from its own thread, not joined yet.
    retiring: Option<thread::JoinHandle<()>>,
    // Being joined by some caller with the lock released.
    draining: Option<ThreadId>,
}

/// Owns the record queue, the global threshold, the sinks and the single
/// consumer thread that connects them.
pub struct LogManager {
    shared: Arc<Shared>,
    consumer: Mutex<Lifecycle>,
    drained: Condvar,
}

/// Returns the process-wide manager, creating it on first use.
#[inline]
pub fn get_manager() -> &'static LogManager {
    LogManager::global()
}

impl LogManager {
    /// A manager writing to standard output, threshold `None`, consumer idle.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(Box::new(ConsoleAppender::new()))
    }

    /// A manager whose console sink is `console` instead of standard output.
    #[must_use]
    pub fn with_console(console: Box<dyn Appender>) -> Self {
        Self {
            shared: Arc::new(Shared {
                threshold: AtomicU8::new(Severity::None.as_u8()),
                running: AtomicBool::new(false),
                queue: RecordQueue::new(),
                console: Mutex::new(console),
                file: Mutex::new(None),
                metrics: LoggerMetrics::new(),
            }),
            consumer: Mutex::new(Lifecycle::default()),
            drained: Condvar::new(),
        }
    }

    /// The process-wide instance. Creation is race-free; once created, access
    /// does not take a lock.
    pub fn global() -> &'static LogManager {
        MANAGER.get_or_init(LogManager::new)
    }

    #[must_use]
    pub fn builder() -> LogManagerBuilder {
        LogManagerBuilder::new()
    }

    /// Set the global threshold. Records already queued are filtered against
    /// whatever value is current when the consumer reaches them.
    pub fn set_level(&self, level: Severity) {
        self.shared.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn level(&self) -> Severity {
        Severity::from_u8(self.shared.threshold.load(Ordering::Relaxed))
    }

    /// Truncate `path` to zero length and mirror every admitted record into it
    /// from now on.
    ///
    /// A failed truncation is reported on stderr; the sink is enabled anyway and
    /// later append failures are counted in [`LoggerMetrics::file_errors`].
    pub fn set_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut file = self.shared.file.lock();
        let appender = match FileAppender::truncate(path) {
            Ok(appender) => appender,
            Err(e) => {
                self.shared.metrics.record_file_error();
                eprintln!("[LOGGER ERROR] {}", e);
                FileAppender::new(path)
            }
        };
        *file = Some(appender);
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.shared
            .file
            .lock()
            .as_ref()
            .map(|appender| appender.path().to_path_buf())
    }

    /// Apply `config`: threshold, then file sink, then optionally start.
    pub fn configure(&self, config: &ManagerConfig) {
        self.set_level(config.level);
        if let Some(path) = &config.file {
            self.set_file(path);
        }
        if config.autostart {
            self.start();
        }
    }

    /// Build a record and enqueue it. Never blocks and never fails; filtering
    /// happens on the consumer side.
    pub fn log(&self, level: Severity, file: &str, function: &str, message: impl Into<String>) {
        self.submit(LogRecord::new(level, file, function, message));
    }

    /// Enqueue an already built record.
    pub fn submit(&self, record: LogRecord) {
        self.shared.metrics.record_submitted();
        if self.shared.queue.try_push(Envelope::Record(record)).is_err() {
            self.shared.metrics.record_dropped();
        }
    }

    /// Spawn the consumer. Calling `start` on a running manager does nothing.
    ///
    /// A consumer that is still draining after a `stop` is waited for first.
    /// Called from a consumer that stopped itself, `start` keeps that thread
    /// as the consumer; called from a consumer another caller is stopping, it
    /// does nothing.
    pub fn start(&self) {
        let mut lifecycle = self.consumer.lock();
        self.wait_for_retired(&mut lifecycle);

        if lifecycle.active.is_some() || lifecycle.draining.is_some() {
            return;
        }
        if let Some(handle) = lifecycle.retiring.take() {
            // Its pending sentinel is ignored while `running` is set.
            self.shared.running.store(true, Ordering::Release);
            lifecycle.active = Some(handle);
            return;
        }

        self.shared.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name(CONSUMER_THREAD_NAME.to_string())
            .spawn(move || shared.run());

        match spawned {
            Ok(handle) => lifecycle.active = Some(handle),
            Err(e) => {
                self.shared.running.store(false, Ordering::Release);
                eprintln!("[LOGGER ERROR] Failed to spawn consumer thread: {}", e);
            }
        }
    }

    /// Stop the consumer and wait for it to exit. Calling `stop` on an idle
    /// manager does nothing.
    ///
    /// Every record enqueued before this call has been processed when it
    /// returns. Records enqueued concurrently may land behind the sentinel;
    /// they stay queued and are processed by the next `start`.
    ///
    /// Called from the consumer thread (e.g. by an appender), `stop` cannot
    /// join; the consumer exits once it reaches the sentinel.
    pub fn stop(&self) {
        let mut lifecycle = self.consumer.lock();
        self.wait_for_retired(&mut lifecycle);

        let Some(handle) = lifecycle.active.take() else {
            return;
        };
        self.shared.running.store(false, Ordering::Release);
        self.shared.queue.push(Envelope::Shutdown);

        if handle.thread().id() == thread::current().id() {
            lifecycle.retiring = Some(handle);
            return;
        }
        self.join_unlocked(&mut lifecycle, handle);
    }

    /// Block until no consumer other than the calling thread is shutting down.
    fn wait_for_retired(&self, lifecycle: &mut MutexGuard<'_, Lifecycle>) {
        let current = thread::current().id();
        loop {
            if let Some(id) = lifecycle.draining {
                if id == current {
                    return;
                }
                self.drained.wait(lifecycle);
                continue;
            }
            match lifecycle.retiring.take() {
                Some(handle) if handle.thread().id() == current => {
                    lifecycle.retiring = Some(handle);
                    return;
                }
                Some(handle) => self.join_unlocked(lifecycle, handle),
                None => return,
            }
        }
    }

    // The lock is released while joining so the consumer can still reach
    // `start`/`stop` from an appender.
    fn join_unlocked(
        &self,
        lifecycle: &mut MutexGuard<'_, Lifecycle>,
        handle: thread::JoinHandle<()>,
    ) {
        lifecycle.draining = Some(handle.thread().id());
        MutexGuard::unlocked(lifecycle, || join_consumer(handle));
        lifecycle.draining = None;
        self.drained.notify_all();
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Records (and sentinels) waiting in the queue.
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }
}

impl Shared {
    fn run(&self) {
        loop {
            let envelope = match self.queue.pop() {
                Ok(envelope) => envelope,
                Err(e) => {
                    eprintln!("[LOGGER ERROR] {}; consumer exiting", e);
                    break;
                }
            };

            match envelope {
                Envelope::Record(record) => self.dispatch(&record),
                Envelope::Shutdown => {
                    if !self.running.load(Ordering::Acquire) {
                        break;
                    }
                }
            }
        }

        if let Err(message) = isolate(|| self.console.lock().flush()) {
            eprintln!("[LOGGER ERROR] Console flush failed: {}", message);
        }
    }

    fn dispatch(&self, record: &LogRecord) {
        let threshold = Severity::from_u8(self.threshold.load(Ordering::Relaxed));
        if !threshold.admits(record.level()) {
            self.metrics.record_filtered();
            return;
        }

        {
            let mut console = self.console.lock();
            match isolate(|| console.append(record)) {
                Ok(()) => {
                    self.metrics.record_emitted();
                }
                Err(message) => {
                    let previous = self.metrics.record_dropped();
                    if should_alert(previous) {
                        eprintln!(
                            "[LOGGER ERROR] Appender '{}' failed: {} ({} records dropped)",
                            console.name(),
                            message,
                            previous + 1
                        );
                    }
                }
            }
        }

        let mut file = self.file.lock();
        if let Some(appender) = file.as_mut() {
            if let Err(message) = isolate(|| appender.append(record)) {
                let previous = self.metrics.record_file_error();
                if should_alert(previous) {
                    eprintln!(
                        "[LOGGER WARNING] File sink '{}' failed: {} ({} failures)",
                        appender.path().display(),
                        message,
                        previous + 1
                    );
                }
            }
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LogManager {
    fn drop(&mut self) {
        self.stop();
    }
}

fn join_consumer(handle: thread::JoinHandle<()>) {
    if let Err(e) = handle.join() {
        eprintln!(
            "[LOGGER ERROR] Consumer thread panicked during shutdown: {}",
            panic_message(e.as_ref())
        );
    }
}

/// Run an appender call, turning both errors and panics into a message.
fn isolate<F>(f: F) -> std::result::Result<(), String>
where
    F: FnOnce() -> super::error::Result<()>,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(panic_info) => Err(format!("panicked: {}", panic_message(panic_info.as_ref()))),
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Alert on the first failure and every thousandth after it.
fn should_alert(previous: u64) -> bool {
    previous == 0 || (previous + 1) % 1000 == 0
}

/// Builder for a non-global [`LogManager`]
///
/// # Example
/// ```
/// use log_pipeline::prelude::*;
///
/// let output = MemoryAppender::new();
/// let manager = LogManager::builder()
///     .level(Severity::Info)
///     .console(output.clone())
///     .build();
///
/// manager.start();
/// manager.log(Severity::Info, "src/lib/foo.cpp", "bar", "hi");
/// manager.stop();
///
/// assert_eq!(output.contents(), "[INFO] foo.cpp bar - hi\n");
/// ```
pub struct LogManagerBuilder {
    level: Severity,
    file: Option<PathBuf>,
    console: Option<Box<dyn Appender>>,
}

impl LogManagerBuilder {
    pub fn new() -> Self {
        Self {
            level: Severity::None,
            file: None,
            console: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Enable the file sink; the file is truncated when the manager is built.
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the standard-output sink.
    #[must_use = "builder methods return a new value"]
    pub fn console<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.console = Some(Box::new(appender));
        self
    }

    /// Build the manager. The consumer is not started.
    pub fn build(self) -> LogManager {
        let manager = match self.console {
            Some(console) => LogManager::with_console(console),
            None => LogManager::new(),
        };
        manager.set_level(self.level);
        if let Some(path) = self.file {
            manager.set_file(path);
        }
        manager
    }
}

impl Default for LogManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
