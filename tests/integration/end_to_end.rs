//! End-to-End Pipeline Tests
//!
//! Runs full producer/consumer pipelines through the public API and checks
//! the ordering contract across capacities, payload types, failure modes,
//! and repeated runs.

use std::io;

use proptest::prelude::*;

use conveyor::pipeline::{self, Pipeline, PipelineConfig, PipelineError};
use conveyor::queue::QueueError;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_round_trip_small_capacity_repeated() {
    init_logging();
    let source: Vec<i32> = (0..10).collect();
    // Repetition is the point: a reordering race would not show up on a
    // single run.
    for _ in 0..100 {
        let collected = pipeline::run(source.clone(), 3).unwrap();
        assert_eq!(collected, source);
    }
}

#[test]
fn test_string_payloads() {
    init_logging();
    let source = vec![
        "alpha".to_owned(),
        "beta".to_owned(),
        "gamma".to_owned(),
        "delta".to_owned(),
    ];
    let collected = pipeline::run(source.clone(), 2).unwrap();
    assert_eq!(collected, source);
}

#[test]
fn test_empty_source_does_not_block() {
    init_logging();
    let collected: Vec<i32> = pipeline::run(Vec::new(), 3).unwrap();
    assert!(collected.is_empty());
}

#[test]
fn test_terminator_lookalikes_are_delivered() {
    init_logging();
    // Payloads that resemble an end marker are ordinary items; the real
    // terminator is a distinct variant, not a value comparison.
    let source = vec!["".to_owned(), "done".to_owned(), "STOP".to_owned(), "".to_owned()];
    let collected = pipeline::run(source.clone(), 2).unwrap();
    assert_eq!(collected, source);
}

#[test]
fn test_invalid_capacity_from_entry_point() {
    init_logging();
    let err = pipeline::run(vec![1, 2, 3], 0).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Queue(QueueError::InvalidCapacity)
    ));
}

#[test]
fn test_fallible_source_success_path() {
    init_logging();
    let source = (0..20).map(Ok::<i32, io::Error>);
    let collected = pipeline::try_run(source, 4).unwrap();
    assert_eq!(collected, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_source_failure_is_surfaced_and_run_terminates() {
    init_logging();
    let source = vec![
        Ok(1),
        Ok(2),
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "feed went away")),
        Ok(3),
    ];
    // The call must return rather than hang: the failing producer still
    // releases the consumer.
    let err = pipeline::try_run(source, 1).unwrap_err();
    assert!(matches!(err, PipelineError::Producer { .. }));
    assert!(err.to_string().contains("feed went away"));
}

#[test]
fn test_custom_configuration_round_trip() {
    init_logging();
    let pipeline = Pipeline::new(PipelineConfig {
        capacity: 5,
        producer_thread_name: "loader".to_owned(),
        consumer_thread_name: "collector".to_owned(),
    })
    .unwrap();
    let source: Vec<u64> = (0..50).collect();
    let collected = pipeline.run(source.clone()).unwrap();
    assert_eq!(collected, source);
}

proptest! {
    /// For every finite sequence and every positive capacity, the pipeline
    /// returns the sequence unchanged.
    #[test]
    fn prop_pipeline_preserves_any_sequence(
        items in proptest::collection::vec(any::<i32>(), 0..200),
        capacity in 1usize..32,
    ) {
        let collected = pipeline::run(items.clone(), capacity).unwrap();
        prop_assert_eq!(collected, items);
    }
}
