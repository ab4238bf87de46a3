// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::channel_signal_sender::ChannelSignalSender;
use bounded_counter_core::completion_barrier::CompletionBarrier;
use tokio::sync::mpsc::{self, Sender};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{StreamExt, StreamMap};

/// Completion message: Ok for success, Err for failure
pub type CompletionMessage = Result<usize, ()>;

/// Channel-based completion barrier using tokio mpsc and StreamMap
/// Each unit gets its own channel; a completed stream is dropped from the map,
/// so the map drains to empty once every unit has signaled
pub struct ChannelCompletionBarrier {
    signal_txs: Vec<Sender<CompletionMessage>>,
    signal_streams: StreamMap<usize, ReceiverStream<CompletionMessage>>,
}

impl CompletionBarrier for ChannelCompletionBarrier {
    type Sender = ChannelSignalSender;

    fn setup(num_units: usize) -> Self {
        let mut signal_txs = Vec::new();
        let mut signal_streams = StreamMap::new();

        for unit_id in 0..num_units {
            // Each unit signals exactly once
            let (tx, rx) = mpsc::channel::<CompletionMessage>(1);
            signal_txs.push(tx);
            signal_streams.insert(unit_id, ReceiverStream::new(rx));
        }

        Self {
            signal_txs,
            signal_streams,
        }
    }

    fn sender(&self, unit_id: usize) -> Self::Sender {
        ChannelSignalSender {
            tx: self.signal_txs[unit_id].clone(),
        }
    }

    async fn wait_next(&mut self) -> Option<Result<usize, usize>> {
        self.signal_streams.next().await.map(|(stream_id, msg)| {
            match msg {
                Ok(unit_id) => Ok(unit_id),
                Err(_) => Err(stream_id), // stream_id is the failed unit_id
            }
        })
    }
}
