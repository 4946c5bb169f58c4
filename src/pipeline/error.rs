//! Pipeline Error Types
//!
//! Worker threads never crash the process: their failures are captured and
//! re-surfaced to the caller after both threads have been joined. The error
//! distinguishes which side of the pipeline failed.

use std::any::Any;

use thiserror::Error;

use crate::queue::QueueError;

/// Boxed error used to carry arbitrary source/destination failures across
/// the thread boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported by a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Queue construction rejected the configuration
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// The source sequence failed mid-iteration, or the producer thread
    /// terminated abnormally
    #[error("producer failed: {source}")]
    Producer {
        #[source]
        source: BoxError,
    },

    /// The destination rejected an item, or the consumer thread terminated
    /// abnormally
    #[error("consumer failed: {source}")]
    Consumer {
        #[source]
        source: BoxError,
    },
}

impl PipelineError {
    /// Wrap a source failure as a producer error
    pub fn producer(source: impl Into<BoxError>) -> Self {
        Self::Producer {
            source: source.into(),
        }
    }

    /// Wrap a destination failure as a consumer error
    pub fn consumer(source: impl Into<BoxError>) -> Self {
        Self::Consumer {
            source: source.into(),
        }
    }
}

/// A worker thread panic converted into an error value
#[derive(Debug, Error)]
#[error("worker thread panicked: {message}")]
pub struct WorkerPanic {
    message: String,
}

impl WorkerPanic {
    /// Extract a readable message from a panic payload. Payloads are almost
    /// always `&str` or `String`; anything else is reported opaquely.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_owned());
        Self { message }
    }
}
