// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use bounded_counter_core::atomic_cell::AtomicCell;
use bounded_counter_core::counter_cell::CounterCell;
use bounded_counter_core::counter_error::CounterError;
use bounded_counter_core::mutex_cell::MutexCell;
use bounded_counter_thread_sync::types::ThreadCounterRun;
use std::time::Duration;
use tokio::time::timeout;

// ============================================================
// Safety: final total equals the number of launched units
// ============================================================

#[tokio::test]
async fn test_safety_mutex_total_equals_units() {
    let run = ThreadCounterRun::launch(MutexCell::new(), 1000);

    assert_eq!(run.await_and_read().await, Ok(1000));
}

#[tokio::test]
async fn test_safety_atomic_total_equals_units() {
    let run = ThreadCounterRun::launch(AtomicCell::new(), 1000);

    assert_eq!(run.await_and_read().await, Ok(1000));
}

#[tokio::test]
async fn test_safety_single_unit_both_strategies() {
    let run = ThreadCounterRun::launch(MutexCell::new(), 1);
    assert_eq!(run.await_and_read().await, Ok(1));

    let run = ThreadCounterRun::launch(AtomicCell::new(), 1);
    assert_eq!(run.await_and_read().await, Ok(1));
}

// OS threads are heavier than tasks, so the trial count is smaller here;
// the task-channels suite covers the 100-trial property
#[tokio::test]
async fn test_safety_repeated_trials_both_strategies() {
    for _ in 0..25 {
        let run = ThreadCounterRun::launch(MutexCell::new(), 200);
        assert_eq!(run.await_and_read().await, Ok(200), "Lost an update");

        let run = ThreadCounterRun::launch(AtomicCell::new(), 200);
        assert_eq!(run.await_and_read().await, Ok(200), "Lost an update");
    }
}

#[tokio::test]
async fn test_safety_stress_increasing_units() {
    for num_units in [10, 100, 1000] {
        let run = ThreadCounterRun::launch(MutexCell::new(), num_units);
        assert_eq!(run.await_and_read().await, Ok(num_units as u64));
    }
}

#[tokio::test]
async fn test_safety_fresh_run_reproduces_total() {
    let first = ThreadCounterRun::launch(MutexCell::new(), 300)
        .await_and_read()
        .await;
    let second = ThreadCounterRun::launch(MutexCell::new(), 300)
        .await_and_read()
        .await;

    assert_eq!(first, Ok(300));
    assert_eq!(second, first);
}

// ============================================================
// Liveness: the coordinator neither under-waits nor hangs
// ============================================================

#[tokio::test]
async fn test_liveness_zero_units_returns_immediately() {
    let run = ThreadCounterRun::launch(AtomicCell::new(), 0);

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

    let run = ThreadCounterRun::launch(PanickingCell, 4);

    let result = timeout(Duration::from_secs(5), run.await_and_read())
        .await
        .expect("Failed units must still signal the barrier");

    match result {
        Err(CounterError::UnitFailed(_)) => {}
        other => panic!("Expected UnitFailed, got {:?}", other),
    }
}
