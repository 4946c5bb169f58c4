//! Producer-Consumer Pipeline
//!
//! This module wires one producer and one consumer thread to a shared
//! [`BoundedQueue`](crate::queue::BoundedQueue) and returns the collected
//! output to the caller once both have terminated.
//!
//! # Architecture
//!
//! - **[`Producer`]**: drives a finite source sequence into the queue, then
//!   emits the end-of-stream terminator
//! - **[`Consumer`]**: drains the queue into a destination, stopping at the
//!   terminator
//! - **[`Pipeline`]**: fork/join orchestration — spawn both, join both,
//!   surface the first failure or hand back the destination
//!
//! Items arrive in the destination in exactly the order the source yielded
//! them; the queue capacity only bounds how far the producer can run ahead.
//!
//! # Usage
//!
//! ```rust
//! use conveyor::pipeline;
//!
//! let collected = pipeline::run(vec!["a", "b", "c"], 2).unwrap();
//! assert_eq!(collected, vec!["a", "b", "c"]);
//! ```

pub mod consumer;
pub mod error;
pub mod message;
pub mod producer;
pub mod runner;

// Re-export main types for convenience
pub use consumer::{Consumer, Destination};
pub use error::{BoxError, PipelineError, WorkerPanic};
pub use message::Envelope;
pub use producer::Producer;
pub use runner::{run, try_run, Pipeline, PipelineConfig, DEFAULT_CAPACITY};
