// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;

/// Trait for abstracting the execution substrate (tasks, threads)
pub trait UnitRuntime: Send + 'static {
    type Handle: Send;
    type Error: std::fmt::Display + Send;

    /// Spawn a work unit
    fn spawn<F, Fut>(f: F) -> Self::Handle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static;

    /// Wait for the unit to terminate
    fn join(handle: Self::Handle) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
