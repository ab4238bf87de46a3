// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::channel_completion_barrier::ChannelCompletionBarrier;
use crate::tokio_runtime::TokioRuntime;
use bounded_counter_core::counter_run::CounterRun;

/// Coordinator assembled for tokio tasks with channel signaling
pub type TaskCounterRun<C> = CounterRun<C, ChannelCompletionBarrier, TokioRuntime>;
