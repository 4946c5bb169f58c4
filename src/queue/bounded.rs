//! Fixed-Capacity Blocking FIFO
//!
//! Core queue implementation: one mutex guarding a `VecDeque` buffer plus
//! two condition variables, one per waiting role. All buffer mutation
//! happens with the lock held; waiting releases the lock and reacquires it
//! before re-checking, so the `0 <= len <= capacity` invariant holds at
//! every observable point.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::queue::error::{FullError, PutTimeoutError, QueueError, QueueResult};
use crate::queue::statistics::QueueStats;

/// Buffer and counters, only ever touched with the lock held.
#[derive(Debug)]
struct State<T> {
    buffer: VecDeque<T>,
    total_enqueued: u64,
    total_dequeued: u64,
}

/// Thread-safe bounded FIFO queue with blocking `put` and `get`.
///
/// The queue never drops or reorders items: the sequence of `get` returns is
/// exactly the sequence of `put` calls. Capacity is fixed at construction.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` items.
    ///
    /// Fails with [`QueueError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> QueueResult<Self> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }
        Ok(Self {
            state: Mutex::new(State {
                buffer: VecDeque::with_capacity(capacity),
                total_enqueued: 0,
                total_dequeued: 0,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity,
        })
    }

    /// Append `item` at the tail, blocking while the queue is full.
    ///
    /// The calling thread suspends with the lock released and re-checks
    /// fullness on every wakeup, so spurious wakeups and lost races against
    /// other waiters are handled. Exactly one waiting consumer is notified
    /// after the append.
    pub fn put(&self, item: T) {
        let mut state = self.state.lock();
        while state.buffer.len() == self.capacity {
            log::debug!("queue full (capacity {}), producer waiting", self.capacity);
            self.not_full.wait(&mut state);
        }
        state.buffer.push_back(item);
        state.total_enqueued += 1;
        log::trace!("put: queue length now {}", state.buffer.len());
        drop(state);
        self.not_empty.notify_one();
    }

    /// Remove and return the head item, blocking while the queue is empty.
    ///
    /// Emptiness is re-checked on every wakeup. Exactly one waiting producer
    /// is notified after the removal.
    pub fn get(&self) -> T {
        let mut state = self.state.lock();
        let item = loop {
            match state.buffer.pop_front() {
                Some(item) => break item,
                None => {
                    log::debug!("queue empty, consumer waiting");
                    self.not_empty.wait(&mut state);
                }
            }
        };
        state.total_dequeued += 1;
        log::trace!("get: queue length now {}", state.buffer.len());
        drop(state);
        self.not_full.notify_one();
        item
    }

    /// Non-blocking `put`. On a full queue the item is handed back.
    pub fn try_put(&self, item: T) -> Result<(), FullError<T>> {
        let mut state = self.state.lock();
        if state.buffer.len() == self.capacity {
            return Err(FullError(item));
        }
        state.buffer.push_back(item);
        state.total_enqueued += 1;
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Non-blocking `get`. Returns `None` on an empty queue.
    pub fn try_get(&self) -> Option<T> {
        let mut state = self.state.lock();
        let item = state.buffer.pop_front()?;
        state.total_dequeued += 1;
        drop(state);
        self.not_full.notify_one();
        Some(item)
    }

    /// `put` with a deadline. Hands the item back if no space appears
    /// within `timeout`.
    pub fn put_timeout(&self, item: T, timeout: Duration) -> Result<(), PutTimeoutError<T>> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        while state.buffer.len() == self.capacity {
            let wait = self.not_full.wait_until(&mut state, deadline);
            // A wakeup can race the deadline; only give up if still full.
            if wait.timed_out() && state.buffer.len() == self.capacity {
                return Err(PutTimeoutError(item));
            }
        }
        state.buffer.push_back(item);
        state.total_enqueued += 1;
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// `get` with a deadline. Fails with [`QueueError::Timeout`] if no item
    /// arrives within `timeout`.
    pub fn get_timeout(&self, timeout: Duration) -> QueueResult<T> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        loop {
            if let Some(item) = state.buffer.pop_front() {
                state.total_dequeued += 1;
                drop(state);
                self.not_full.notify_one();
                return Ok(item);
            }
            let wait = self.not_empty.wait_until(&mut state, deadline);
            if wait.timed_out() && state.buffer.is_empty() {
                return Err(QueueError::Timeout);
            }
        }
    }

    /// Number of items currently queued.
    ///
    /// Snapshot taken under the lock; it may be stale by the time the caller
    /// acts on it. The same caveat applies to [`is_empty`](Self::is_empty)
    /// and [`is_full`](Self::is_full).
    pub fn len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// Whether the queue currently holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.lock().buffer.is_empty()
    }

    /// Whether the queue is currently at capacity.
    pub fn is_full(&self) -> bool {
        self.state.lock().buffer.len() == self.capacity
    }

    /// Maximum number of items the queue can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Coherent snapshot of queue length and lifetime counters.
    pub fn stats(&self) -> QueueStats {
        let state = self.state.lock();
        QueueStats {
            length: state.buffer.len(),
            capacity: self.capacity,
            total_enqueued: state.total_enqueued,
            total_dequeued: state.total_dequeued,
        }
    }
}
