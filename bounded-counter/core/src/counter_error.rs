// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// A unit signaled an abnormal exit instead of a completed increment
    UnitFailed(usize),

    /// No further signal can arrive while units are still outstanding
    BarrierClosed { outstanding: usize },

    /// The execution substrate reported a failed join
    JoinFailed(String),
}

impl std::fmt::Display for CounterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterError::UnitFailed(unit_id) => {
                write!(f, "Unit {} failed before completing its increment", unit_id)
            }
            CounterError::BarrierClosed { outstanding } => {
                write!(
                    f,
                    "Completion barrier closed with {} units outstanding",
                    outstanding
                )
            }
            CounterError::JoinFailed(msg) => write!(f, "Join failed: {}", msg),
        }
    }
}

impl std::error::Error for CounterError {}
