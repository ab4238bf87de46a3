// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use bounded_counter_core::unit_runtime::UnitRuntime;
use std::thread::{self, JoinHandle};

/// OS thread-based runtime
pub struct ThreadRuntime;

impl UnitRuntime for ThreadRuntime {
    type Handle = JoinHandle<()>;
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn spawn<F, Fut>(f: F) -> Self::Handle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        // Unit bodies are futures, so each thread blocks on a small local runtime
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("Failed to build unit runtime");
            rt.block_on(f());
        })
    }

    async fn join(handle: Self::Handle) -> Result<(), Self::Error> {
        tokio::task::spawn_blocking(move || {
            handle
                .join()
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Thread join error: {:?}", e).into()
                })
        })
        .await
        .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("Tokio join error: {}", e).into()
        })?
    }
}
