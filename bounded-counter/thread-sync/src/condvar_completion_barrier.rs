// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::condvar_signal_sender::{CondvarSignalSender, SignalQueue};
use bounded_counter_core::completion_barrier::CompletionBarrier;
use std::sync::Arc;

/// Condvar-based completion barrier for thread-backed units
/// Counts down from the number of launched units; once every signal has been
/// consumed, no further signal can arrive and wait_next reports None
pub struct CondvarCompletionBarrier {
    queue: Arc<SignalQueue>,
    remaining: usize,
}

impl CompletionBarrier for CondvarCompletionBarrier {
    type Sender = CondvarSignalSender;

    fn setup(num_units: usize) -> Self {
        Self {
            queue: Arc::new(SignalQueue::new()),
            remaining: num_units,
        }
    }

    fn sender(&self, unit_id: usize) -> Self::Sender {
        CondvarSignalSender {
            queue: self.queue.clone(),
            unit_id,
        }
    }

    async fn wait_next(&mut self) -> Option<Result<usize, usize>> {
        if self.remaining == 0 {
            return None;
        }

        // The condvar wait blocks, so it runs on the blocking pool
        let queue = self.queue.clone();
        let signal = tokio::task::spawn_blocking(move || {
            let mut signals = queue.signals.lock().unwrap();
            loop {
                if let Some(signal) = signals.pop_front() {
                    return signal;
                }
                signals = queue.signaled.wait(signals).unwrap();
            }
        })
        .await
        .expect("Completion wait task panicked");

        self.remaining -= 1;
        Some(signal)
    }
}
