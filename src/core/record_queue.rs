//! Unbounded multi-producer / single-consumer record queue
//!
//! Producers push without ever blocking; the consumer parks in [`RecordQueue::pop`]
//! until a push wakes it. Ordering follows the completion order of pushes.

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

pub struct RecordQueue<T = LogRecord> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> RecordQueue<T> {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Append `item` at the tail, swallowing any failure.
    #[inline]
    pub fn push(&self, item: T) {
        let _ = self.try_push(item);
    }

    /// Fallible form of [`RecordQueue::push`].
    ///
    /// The queue holds its own receiver, so the channel cannot disconnect while
    /// the queue is alive; the error arm exists for completeness only.
    pub fn try_push(&self, item: T) -> Result<()> {
        self.sender
            .send(item)
            .map_err(|_| LoggerError::ChannelSendError)
    }

    /// Remove and return the head, parking the caller while the queue is empty.
    pub fn pop(&self) -> Result<T> {
        self.receiver
            .recv()
            .map_err(|_| LoggerError::ChannelReceiveError)
    }

    /// Non-blocking pop.
    pub fn try_pop(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Pop with an upper bound on how long to park.
    pub fn pop_timeout(&self, timeout: Duration) -> Option<T> {
        match self.receiver.recv_timeout(timeout) {
            Ok(item) => Some(item),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl<T> Default for RecordQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
