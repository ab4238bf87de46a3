// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::fs;

/// Run configuration loaded from a JSON file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Number of work units to launch per run
    pub num_units: usize,
    /// Number of complete runs to execute, each with a fresh cell
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Increment discipline; absent = run both and compare
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

fn default_trials() -> usize {
    1
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn print_summary(&self) {
        println!("Units per run: {}", self.num_units);
        println!("Trials: {}", self.trials);
        match self.strategy {
            Some(strategy) => println!("Strategy: {}", strategy),
            None => println!("Strategy: both (mutex + atomic)"),
        }
    }
}
