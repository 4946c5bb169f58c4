//! Queue Error Types
//!
//! Defines error types specific to queue construction and timed operations.
//! The non-blocking and timed `put` variants return dedicated errors that
//! hand the rejected item back to the caller, so no payload is ever lost on
//! a full queue.

use std::fmt;
use thiserror::Error;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur during queue operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Queue was constructed with a capacity of zero
    #[error("queue capacity must be at least 1")]
    InvalidCapacity,

    /// A timed `get` ran out of time before an item arrived
    #[error("timed out waiting for an item")]
    Timeout,
}

/// Error returned by `try_put` on a full queue; carries the rejected item.
///
/// Debug, Display and Error are implemented by hand so the payload type does
/// not need to be `Debug` itself.
pub struct FullError<T>(pub T);

impl<T> FullError<T> {
    /// Recover the item that could not be enqueued
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for FullError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FullError(..)")
    }
}

impl<T> fmt::Display for FullError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue is full")
    }
}

impl<T> std::error::Error for FullError<T> {}

/// Error returned by `put_timeout` when the deadline passes; carries the item.
pub struct PutTimeoutError<T>(pub T);

impl<T> PutTimeoutError<T> {
    /// Recover the item that could not be enqueued in time
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for PutTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PutTimeoutError(..)")
    }
}

impl<T> fmt::Display for PutTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out waiting for queue space")
    }
}

impl<T> std::error::Error for PutTimeoutError<T> {}
