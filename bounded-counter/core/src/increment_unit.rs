// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::counter_cell::CounterCell;
use crate::signal_sender::SignalSender;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A single ephemeral work unit: one increment, one completion signal
/// Created at launch, consumed by its run
pub struct IncrementUnit<C, S> {
    id: usize,
    cell: C,
    signal: S,
}

impl<C, S> IncrementUnit<C, S>
where
    C: CounterCell,
    S: SignalSender,
{
    pub fn new(id: usize, cell: C, signal: S) -> Self {
        Self { id, cell, signal }
    }

    /// Apply the increment, then signal the barrier
    /// The signal is sent on every exit path, including a panicking cell
    pub async fn run(self) {
        let result = catch_unwind(AssertUnwindSafe(|| self.cell.increment()));

        match result {
            Ok(_) => {
                self.signal.send(Ok(self.id)).await;
            }
            Err(_) => {
                eprintln!("❌ Unit {} panicked during increment!", self.id);
                let _ = self.signal.send(Err(())).await;
            }
        }
    }
}
