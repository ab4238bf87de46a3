// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use bounded_counter_core::atomic_cell::AtomicCell;
use bounded_counter_core::counter_cell::CounterCell;
use bounded_counter_core::counter_error::CounterError;
use bounded_counter_core::mutex_cell::MutexCell;
use bounded_counter_task_channels::types::TaskCounterRun;
use std::time::Duration;
use tokio::time::timeout;

// ============================================================
// Safety: final total equals the number of launched units
// ============================================================

#[tokio::test]
async fn test_safety_mutex_total_equals_units() {
    let run = TaskCounterRun::launch(MutexCell::new(), 1000);

    assert_eq!(run.await_and_read().await, Ok(1000));
}

#[tokio::test]
async fn test_safety_atomic_total_equals_units() {
    let run = TaskCounterRun::launch(AtomicCell::new(), 1000);

    assert_eq!(run.await_and_read().await, Ok(1000));
}

#[tokio::test]
async fn test_safety_single_unit_both_strategies() {
    let run = TaskCounterRun::launch(MutexCell::new(), 1);
    assert_eq!(run.await_and_read().await, Ok(1));

    let run = TaskCounterRun::launch(AtomicCell::new(), 1);
    assert_eq!(run.await_and_read().await, Ok(1));
}

#[tokio::test]
async fn test_safety_repeated_trials_mutex() {
    for _ in 0..100 {
        let run = TaskCounterRun::launch(MutexCell::new(), 1000);
        assert_eq!(run.await_and_read().await, Ok(1000), "Lost an update");
    }
}

#[tokio::test]
async fn test_safety_repeated_trials_atomic() {
    for _ in 0..100 {
        let run = TaskCounterRun::launch(AtomicCell::new(), 1000);
        assert_eq!(run.await_and_read().await, Ok(1000), "Lost an update");
    }
}

#[tokio::test]
async fn test_safety_stress_increasing_units() {
    for num_units in [10, 100, 10_000] {
        let run = TaskCounterRun::launch(MutexCell::new(), num_units);
        assert_eq!(run.await_and_read().await, Ok(num_units as u64));

        let run = TaskCounterRun::launch(AtomicCell::new(), num_units);
        assert_eq!(run.await_and_read().await, Ok(num_units as u64));
    }
}

#[tokio::test]
async fn test_safety_fresh_run_reproduces_total() {
    let first = TaskCounterRun::launch(AtomicCell::new(), 500)
        .await_and_read()
        .await;
    let second = TaskCounterRun::launch(AtomicCell::new(), 500)
        .await_and_read()
        .await;

    assert_eq!(first, Ok(500));
    assert_eq!(second, first);
}

// ============================================================
// Liveness: the coordinator neither under-waits nor hangs
// ============================================================

#[tokio::test]
async fn test_liveness_zero_units_returns_immediately() {
    let run = TaskCounterRun::launch(MutexCell::new(), 0);

    let total = timeout(Duration::from_secs(1), run.await_and_read())
        .await
        .expect("Zero-unit run should not block");

    assert_eq!(total, Ok(0));
}

#[tokio::test]
async fn test_liveness_panicking_unit_still_signals() {
    #[derive(Clone)]
    struct PanickingCell;

    impl CounterCell for PanickingCell {
        fn increment(&self) {
            panic!("Injected failure");
        }

        fn value(&self) -> u64 {
            0
        }
    }

    let run = TaskCounterRun::launch(PanickingCell, 4);

    let result = timeout(Duration::from_secs(5), run.await_and_read())
        .await
        .expect("Failed units must still signal the barrier");

    match result {
        Err(CounterError::UnitFailed(_)) => {}
        other => panic!("Expected UnitFailed, got {:?}", other),
    }
}
