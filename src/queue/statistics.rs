//! Queue Statistics
//!
//! A coherent snapshot of queue occupancy and lifetime counters, taken in a
//! single critical section so the fields are mutually consistent.

/// Point-in-time statistics for a [`BoundedQueue`](crate::queue::BoundedQueue)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    /// Items currently queued
    pub length: usize,

    /// Maximum number of items the queue can hold
    pub capacity: usize,

    /// Items accepted over the queue's lifetime
    pub total_enqueued: u64,

    /// Items handed out over the queue's lifetime
    pub total_dequeued: u64,
}

impl QueueStats {
    /// Whether every accepted item has also been handed out
    pub fn is_drained(&self) -> bool {
        self.total_enqueued == self.total_dequeued
    }
}
