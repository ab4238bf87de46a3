// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod channel_completion_barrier;
pub mod channel_signal_sender;
pub mod tokio_runtime;
pub mod types;
