// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::completion_barrier::CompletionBarrier;
use crate::counter_cell::CounterCell;
use crate::counter_error::CounterError;
use crate::increment_unit::IncrementUnit;
use crate::unit_runtime::UnitRuntime;

/// Coordinator for one bounded run of concurrent increments
/// Owns the cell, the barrier, and the spawned handles for the run's duration
/// Generic over cell strategy, barrier, and runtime
pub struct CounterRun<C, B, R>
where
    C: CounterCell,
    B: CompletionBarrier,
    R: UnitRuntime,
{
    cell: C,
    barrier: B,
    handles: Vec<R::Handle>,
    num_units: usize,
}

impl<C, B, R> CounterRun<C, B, R>
where
    C: CounterCell,
    B: CompletionBarrier,
    R: UnitRuntime,
{
    /// Launch N work units against the given cell
    /// N = 0 is valid: nothing is spawned and await_and_read returns 0
    pub fn launch(cell: C, num_units: usize) -> Self {
        let barrier = B::setup(num_units);
        let mut handles = Vec::with_capacity(num_units);

        for unit_id in 0..num_units {
            let unit = IncrementUnit::new(unit_id, cell.clone(), barrier.sender(unit_id));
            handles.push(R::spawn(move || unit.run()));
        }

        Self {
            cell,
            barrier,
            handles,
            num_units,
        }
    }

    /// Wait until every launched unit has signaled completion, then read
    /// the final total
    /// Returns exactly N for any interleaving of unit execution
    pub async fn await_and_read(mut self) -> Result<u64, CounterError> {
        let mut outstanding = self.num_units;

        while outstanding > 0 {
            match self.barrier.wait_next().await {
                Some(Ok(_unit_id)) => outstanding -= 1,
                Some(Err(unit_id)) => return Err(CounterError::UnitFailed(unit_id)),
                None => return Err(CounterError::BarrierClosed { outstanding }),
            }
        }

        for handle in self.handles.drain(..) {
            R::join(handle)
                .await
                .map_err(|e| CounterError::JoinFailed(e.to_string()))?;
        }

        Ok(self.cell.value())
    }
}
