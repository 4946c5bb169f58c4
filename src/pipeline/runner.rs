//! Pipeline Orchestration
//!
//! Builds one queue, spawns the producer and consumer on their own named
//! threads, joins both, and only then reports the outcome. The calling
//! thread blocks for the duration of the run, so the pipeline is
//! synchronous from the caller's perspective despite the internal
//! concurrency.
//!
//! Failure containment: worker panics are caught inside the worker thread,
//! the peer is released (terminator push on the producer side, drain on the
//! consumer side), and the first failure is re-raised to the caller after
//! both threads have terminated. The orchestrator never hangs on a failed
//! peer and never returns a partial result alongside an error.

use std::convert::Infallible;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::pipeline::consumer::Consumer;
use crate::pipeline::error::{BoxError, PipelineError, WorkerPanic};
use crate::pipeline::message::{drain_until_done, Envelope};
use crate::pipeline::producer::Producer;
use crate::queue::{BoundedQueue, QueueResult};

/// Queue capacity used when the caller does not choose one
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Capacity of the shared queue; must be at least 1
    pub capacity: usize,

    /// Name given to the producer thread
    pub producer_thread_name: String,

    /// Name given to the consumer thread
    pub consumer_thread_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            producer_thread_name: "producer".to_owned(),
            consumer_thread_name: "consumer".to_owned(),
        }
    }
}

/// Orchestrates one producer and one consumer over a shared queue.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline from a validated configuration.
    ///
    /// Capacity is checked here, in the calling thread, so a bad value is
    /// reported synchronously rather than from inside a worker.
    pub fn new(config: PipelineConfig) -> QueueResult<Self> {
        // Probe construction so the capacity rule lives in one place.
        BoundedQueue::<()>::new(config.capacity)?;
        Ok(Self { config })
    }

    /// Create a pipeline with the given queue capacity and default names
    pub fn with_capacity(capacity: usize) -> QueueResult<Self> {
        Self::new(PipelineConfig {
            capacity,
            ..PipelineConfig::default()
        })
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run an infallible source through the pipeline and return the
    /// collected items, in source order.
    pub fn run<T, I>(&self, source: I) -> Result<Vec<T>, PipelineError>
    where
        T: Send,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send,
    {
        self.try_run(source.into_iter().map(Ok::<T, Infallible>))
    }

    /// Run a fallible source through the pipeline.
    ///
    /// A source error stops production, the consumer is still released via
    /// the terminator, and the error is returned after both workers have
    /// terminated. If both sides fail, the producer's error wins (it is
    /// causally upstream) and the consumer's is logged.
    pub fn try_run<T, E, I>(&self, source: I) -> Result<Vec<T>, PipelineError>
    where
        T: Send,
        E: Into<BoxError>,
        I: IntoIterator<Item = Result<T, E>>,
        I::IntoIter: Send,
    {
        let queue = Arc::new(BoundedQueue::new(self.config.capacity)?);
        let producer = Producer::new(Arc::clone(&queue), source.into_iter());
        let consumer = Consumer::new(Arc::clone(&queue));
        log::info!(
            "pipeline starting, queue capacity {}",
            self.config.capacity
        );

        let outcome = crossbeam::thread::scope(|scope| {
            let producer_queue = Arc::clone(&queue);
            let producer_handle = scope
                .builder()
                .name(self.config.producer_thread_name.clone())
                .spawn(move |_| produce_all(producer, &producer_queue))
                .map_err(|err| PipelineError::producer(err))?;

            let consumer_queue = Arc::clone(&queue);
            let consumer_handle = match scope
                .builder()
                .name(self.config.consumer_thread_name.clone())
                .spawn(move |_| consume_all(consumer, &consumer_queue))
            {
                Ok(handle) => handle,
                Err(err) => {
                    // A consumer that never started still has to release the
                    // producer; the calling thread drains in its place.
                    drain_until_done(&queue);
                    return Err(PipelineError::consumer(err));
                }
            };

            let produced = match producer_handle.join() {
                Ok(result) => result,
                Err(payload) => Err(PipelineError::producer(WorkerPanic::from_payload(payload))),
            };
            let collected = match consumer_handle.join() {
                Ok(result) => result,
                Err(payload) => Err(PipelineError::consumer(WorkerPanic::from_payload(payload))),
            };

            match (produced, collected) {
                (Ok(sent), Ok(destination)) => {
                    log::info!(
                        "pipeline complete: {} items produced, {} collected",
                        sent,
                        destination.len()
                    );
                    Ok(destination)
                }
                (Err(producer_err), collected) => {
                    if let Err(consumer_err) = collected {
                        log::warn!("consumer also failed: {}", consumer_err);
                    }
                    Err(producer_err)
                }
                (Ok(_), Err(consumer_err)) => Err(consumer_err),
            }
        });

        // Both workers are joined inside the scope, so a stray panic here
        // would be a bug in the scope body itself.
        match outcome {
            Ok(result) => result,
            Err(payload) => Err(PipelineError::consumer(WorkerPanic::from_payload(payload))),
        }
    }
}

/// `run(source, capacity)` with default thread names.
///
/// This is the entry point most callers want: feed a finite sequence
/// through a bounded queue and get the same sequence back.
pub fn run<T, I>(source: I, capacity: usize) -> Result<Vec<T>, PipelineError>
where
    T: Send,
    I: IntoIterator<Item = T>,
    I::IntoIter: Send,
{
    Pipeline::with_capacity(capacity)?.run(source)
}

/// `try_run(source, capacity)` for fallible sources, with default thread
/// names.
pub fn try_run<T, E, I>(source: I, capacity: usize) -> Result<Vec<T>, PipelineError>
where
    T: Send,
    E: Into<BoxError>,
    I: IntoIterator<Item = Result<T, E>>,
    I::IntoIter: Send,
{
    Pipeline::with_capacity(capacity)?.try_run(source)
}

/// Producer task body: contain panics, guarantee the terminator.
fn produce_all<T, E, I>(
    producer: Producer<T, I>,
    queue: &BoundedQueue<Envelope<T>>,
) -> Result<usize, PipelineError>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| producer.run())) {
        Ok(outcome) => outcome,
        Err(payload) => {
            // A panicking source never reached the terminator; emit it so
            // the consumer still shuts down.
            queue.put(Envelope::Done);
            Err(PipelineError::producer(WorkerPanic::from_payload(payload)))
        }
    }
}

/// Consumer task body: contain panics, release a blocked producer.
fn consume_all<T>(
    consumer: Consumer<T>,
    queue: &BoundedQueue<Envelope<T>>,
) -> Result<Vec<T>, PipelineError> {
    match panic::catch_unwind(AssertUnwindSafe(|| consumer.run())) {
        Ok(outcome) => outcome,
        Err(payload) => {
            drain_until_done(queue);
            Err(PipelineError::consumer(WorkerPanic::from_payload(payload)))
        }
    }
}
