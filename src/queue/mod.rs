//! Bounded Blocking Queue
//!
//! This module provides a thread-safe, fixed-capacity FIFO queue with
//! blocking semantics on both ends: `put` suspends the caller while the
//! queue is full, `get` suspends while it is empty. It is the coordination
//! point between the producer and consumer halves of a pipeline.
//!
//! # Architecture
//!
//! The queue is a classic two-condition monitor:
//!
//! - One mutex guards the buffer and its counters
//! - A "not empty" condition wakes a waiting consumer after a `put`
//! - A "not full" condition wakes a waiting producer after a `get`
//!
//! Splitting the conditions by role means a `put` never wakes another
//! producer and a `get` never wakes another consumer. Waiters always
//! re-check the buffer state in a loop, so spurious wakeups are harmless.
//!
//! # Usage
//!
//! ```rust
//! use conveyor::queue::BoundedQueue;
//!
//! let queue = BoundedQueue::new(2).unwrap();
//! queue.put("a");
//! queue.put("b");
//! assert!(queue.is_full());
//! assert_eq!(queue.get(), "a");
//! assert_eq!(queue.get(), "b");
//! assert!(queue.is_empty());
//! ```

pub mod bounded;
pub mod error;
pub mod statistics;

// Re-export main types for convenience
pub use bounded::BoundedQueue;
pub use error::{FullError, PutTimeoutError, QueueError, QueueResult};
pub use statistics::QueueStats;
