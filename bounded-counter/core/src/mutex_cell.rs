// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::counter_cell::CounterCell;
use std::sync::{Arc, Mutex};

/// Exclusion-strategy cell using Arc<Mutex<u64>>
/// The guard releases the lock on every exit path from the critical section
#[derive(Clone)]
pub struct MutexCell {
    total: Arc<Mutex<u64>>,
}

impl Default for MutexCell {
    fn default() -> Self {
        Self::new()
    }
}

impl MutexCell {
    pub fn new() -> Self {
        Self {
            total: Arc::new(Mutex::new(0)),
        }
    }
}

impl CounterCell for MutexCell {
    fn increment(&self) {
        let mut total = self.total.lock().unwrap();
        *total += 1;
    }

    fn value(&self) -> u64 {
        *self.total.lock().unwrap()
    }
}
