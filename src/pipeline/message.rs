//! Pipeline Wire Type
//!
//! During a run the queue carries [`Envelope`] values rather than bare
//! items: a dedicated `Done` variant marks end-of-stream, so the terminator
//! can never collide with a payload that merely looks like one.

use crate::queue::BoundedQueue;

/// What travels on the queue between producer and consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    /// A payload item, delivered to the destination in order
    Item(T),

    /// End-of-stream terminator, emitted exactly once per run
    Done,
}

impl<T> Envelope<T> {
    /// Whether this envelope is the end-of-stream terminator
    pub fn is_done(&self) -> bool {
        matches!(self, Envelope::Done)
    }

    /// Unwrap the payload, or `None` for the terminator
    pub fn into_item(self) -> Option<T> {
        match self {
            Envelope::Item(item) => Some(item),
            Envelope::Done => None,
        }
    }
}

/// Discard envelopes until the terminator is seen.
///
/// Failure paths use this to release a peer that may be blocked on a full
/// queue: whoever stops consuming early must still drain to the terminator.
pub(crate) fn drain_until_done<T>(queue: &BoundedQueue<Envelope<T>>) {
    let mut discarded = 0usize;
    while !queue.get().is_done() {
        discarded += 1;
    }
    if discarded > 0 {
        log::warn!("discarded {} undelivered items while shutting down", discarded);
    }
}
