// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod atomic_cell;
pub mod completion_barrier;
pub mod config;
pub mod counter_cell;
pub mod counter_error;
pub mod counter_run;
pub mod increment_unit;
pub mod mutex_cell;
pub mod signal_sender;
pub mod strategy;
pub mod unit_runtime;
