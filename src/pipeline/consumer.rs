//! Consumer Side of the Pipeline
//!
//! A consumer is plain data plus a `run` function: it owns the destination
//! container exclusively for the duration of the run and hands it back only
//! after observing the end-of-stream terminator, so the caller never sees a
//! partially-filled destination under concurrent mutation.

use std::convert::Infallible;
use std::sync::Arc;

use crate::pipeline::error::{BoxError, PipelineError};
use crate::pipeline::message::{drain_until_done, Envelope};
use crate::queue::BoundedQueue;

/// An append-only ordered container the consumer writes into.
///
/// `Vec<T>` is the default destination; the trait exists so callers can
/// stream into their own containers (and so destination failures have a
/// typed path back to the orchestrator).
pub trait Destination<T> {
    /// Error raised when an item cannot be appended
    type Error: Into<BoxError>;

    /// Append `item` after every previously appended item
    fn append(&mut self, item: T) -> Result<(), Self::Error>;
}

impl<T> Destination<T> for Vec<T> {
    type Error = Infallible;

    fn append(&mut self, item: T) -> Result<(), Infallible> {
        self.push(item);
        Ok(())
    }
}

/// Drains the queue into a destination, stopping at the terminator.
#[derive(Debug)]
pub struct Consumer<T, D = Vec<T>> {
    queue: Arc<BoundedQueue<Envelope<T>>>,
    destination: D,
}

impl<T> Consumer<T, Vec<T>> {
    /// Create a consumer collecting into a fresh `Vec`
    pub fn new(queue: Arc<BoundedQueue<Envelope<T>>>) -> Self {
        Self::with_destination(queue, Vec::new())
    }
}

impl<T, D> Consumer<T, D>
where
    D: Destination<T>,
{
    /// Create a consumer collecting into `destination`
    pub fn with_destination(queue: Arc<BoundedQueue<Envelope<T>>>, destination: D) -> Self {
        Self { queue, destination }
    }

    /// Repeatedly `get` from the queue, appending every item in arrival
    /// order, until the terminator is seen. The terminator itself is never
    /// appended.
    ///
    /// If the destination rejects an item, the consumer keeps draining to
    /// the terminator before returning the failure, so a producer blocked
    /// on a full queue can always finish.
    pub fn run(mut self) -> Result<D, PipelineError> {
        let mut received = 0usize;
        loop {
            match self.queue.get() {
                Envelope::Item(value) => match self.destination.append(value) {
                    Ok(()) => received += 1,
                    Err(err) => {
                        log::error!("destination rejected item after {} accepted", received);
                        drain_until_done(&self.queue);
                        return Err(PipelineError::consumer(err));
                    }
                },
                Envelope::Done => {
                    log::debug!("consumer saw end-of-stream after {} items", received);
                    return Ok(self.destination);
                }
            }
        }
    }
}
