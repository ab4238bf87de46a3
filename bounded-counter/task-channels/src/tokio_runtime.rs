// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use bounded_counter_core::unit_runtime::UnitRuntime;
use tokio::task::JoinHandle;

/// Tokio task-based runtime
pub struct TokioRuntime;

impl UnitRuntime for TokioRuntime {
    type Handle = JoinHandle<()>;
    type Error = tokio::task::JoinError;

    fn spawn<F, Fut>(f: F) -> Self::Handle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(f())
    }

    async fn join(handle: Self::Handle) -> Result<(), Self::Error> {
        handle.await
    }
}
