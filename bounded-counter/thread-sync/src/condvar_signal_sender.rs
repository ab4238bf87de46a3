// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use bounded_counter_core::signal_sender::SignalSender;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

/// Signal queue shared between work units and the waiting coordinator
pub struct SignalQueue {
    pub(crate) signals: Mutex<VecDeque<Result<usize, usize>>>,
    pub(crate) signaled: Condvar,
}

impl SignalQueue {
    pub(crate) fn new() -> Self {
        Self {
            signals: Mutex::new(VecDeque::new()),
            signaled: Condvar::new(),
        }
    }
}

/// Completion sender backed by a mutex-protected queue and a condvar
#[derive(Clone)]
pub struct CondvarSignalSender {
    pub(crate) queue: Arc<SignalQueue>,
    pub(crate) unit_id: usize,
}

#[async_trait]
impl SignalSender for CondvarSignalSender {
    async fn send(&self, result: Result<usize, ()>) -> bool {
        let signal = match result {
            Ok(unit_id) => Ok(unit_id),
            Err(()) => Err(self.unit_id),
        };

        let mut signals = self.queue.signals.lock().unwrap();
        signals.push_back(signal);
        self.queue.signaled.notify_one();
        true
    }
}
