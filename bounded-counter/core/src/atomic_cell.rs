// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::counter_cell::CounterCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock-free cell using a hardware atomic add, no suspension
#[derive(Clone)]
pub struct AtomicCell {
    total: Arc<AtomicU64>,
}

impl Default for AtomicCell {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicCell {
    pub fn new() -> Self {
        Self {
            total: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl CounterCell for AtomicCell {
    fn increment(&self) {
        self.total.fetch_add(1, Ordering::SeqCst);
    }

    fn value(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }
}
