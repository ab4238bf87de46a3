// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use bounded_counter_core::signal_sender::SignalSender;
use tokio::sync::mpsc;

/// Completion sender backed by a tokio mpsc channel
#[derive(Clone)]
pub struct ChannelSignalSender {
    pub tx: mpsc::Sender<Result<usize, ()>>,
}

#[async_trait]
impl SignalSender for ChannelSignalSender {
    async fn send(&self, result: Result<usize, ()>) -> bool {
        self.tx.send(result).await.is_ok()
    }
}
