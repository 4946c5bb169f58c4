//! Bounded blocking queue and producer-consumer pipeline.
//!
//! The [`queue`] module provides [`queue::BoundedQueue`], a fixed-capacity
//! FIFO with blocking `put`/`get` built on the classic two-condition monitor.
//! The [`pipeline`] module runs one producer and one consumer thread over a
//! shared queue and hands the collected output back to the caller:
//!
//! ```rust
//! let collected = conveyor::pipeline::run(vec![1, 2, 3, 4], 2).unwrap();
//! assert_eq!(collected, vec![1, 2, 3, 4]);
//! ```

pub mod pipeline;
pub mod queue;
