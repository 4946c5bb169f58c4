//! Producer Side of the Pipeline
//!
//! A producer is plain data plus a `run` function: it owns a finite source
//! sequence and a handle to the shared queue, drives the source to
//! completion in order, then emits the end-of-stream terminator.

use std::sync::Arc;

use crate::pipeline::error::{BoxError, PipelineError};
use crate::pipeline::message::Envelope;
use crate::queue::BoundedQueue;

/// Drives a source sequence into the queue, then emits the terminator.
///
/// The source yields `Result` items so fallible inputs (file readers,
/// parsers, network streams) plug in directly; infallible sequences are
/// adapted by wrapping each item in `Ok`.
#[derive(Debug)]
pub struct Producer<T, I> {
    queue: Arc<BoundedQueue<Envelope<T>>>,
    source: I,
}

impl<T, E, I> Producer<T, I>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    /// Create a producer over `source` feeding `queue`
    pub fn new(queue: Arc<BoundedQueue<Envelope<T>>>, source: I) -> Self {
        Self { queue, source }
    }

    /// Iterate the source to completion, blocking on `put` as needed, and
    /// emit the terminator. Returns the number of items sent.
    ///
    /// If the source fails mid-iteration the terminator is still emitted,
    /// so a consumer blocked on `get` is always released, and the failure
    /// is returned for the orchestrator to surface after both joins.
    pub fn run(self) -> Result<usize, PipelineError> {
        let mut sent = 0usize;
        for item in self.source {
            match item {
                Ok(value) => {
                    self.queue.put(Envelope::Item(value));
                    sent += 1;
                }
                Err(err) => {
                    self.queue.put(Envelope::Done);
                    log::error!("source failed after {} items", sent);
                    return Err(PipelineError::producer(err));
                }
            }
        }
        self.queue.put(Envelope::Done);
        log::debug!("producer finished, {} items sent", sent);
        Ok(sent)
    }
}
