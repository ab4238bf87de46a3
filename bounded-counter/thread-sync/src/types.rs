// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::condvar_completion_barrier::CondvarCompletionBarrier;
use crate::thread_runtime::ThreadRuntime;
use bounded_counter_core::counter_run::CounterRun;

/// Coordinator assembled for OS threads with condvar signaling
pub type ThreadCounterRun<C> = CounterRun<C, CondvarCompletionBarrier, ThreadRuntime>;
