// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::signal_sender::SignalSender;
use std::future::Future;

/// Trait for abstracting the completion barrier
/// This allows different implementations for tasks, threads, and processes
pub trait CompletionBarrier: Send {
    /// The sender type passed to work units for signaling completion
    type Sender: SignalSender + 'static;

    /// Setup the barrier for N work units
    fn setup(num_units: usize) -> Self;

    /// Get the signal sender for a specific unit
    fn sender(&self, unit_id: usize) -> Self::Sender;

    /// Wait for the next unit to complete or fail
    /// Returns Ok(unit_id) on success, Err(unit_id) on failure
    /// Returns None if no further signal can arrive
    fn wait_next(&mut self) -> impl Future<Output = Option<Result<usize, usize>>> + Send;
}
