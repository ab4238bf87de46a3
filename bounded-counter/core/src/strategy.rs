// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Increment discipline for a run
/// Exactly one discipline governs all access to a cell for a run's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exclusive lock around each increment
    Mutex,
    /// Hardware atomic add, no lock and no suspension
    Atomic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Mutex => write!(f, "mutex"),
            Strategy::Atomic => write!(f, "atomic"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutex" => Ok(Strategy::Mutex),
            "atomic" => Ok(Strategy::Atomic),
            other => Err(format!("Unknown strategy '{}'", other)),
        }
    }
}
