// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trait for the shared counter mutated by concurrent work units
/// Implementations handle concurrency internally
pub trait CounterCell: Clone + Send + Sync + 'static {
    /// Apply exactly one increment to the counter
    fn increment(&self);

    /// Read the current total
    fn value(&self) -> u64;
}
