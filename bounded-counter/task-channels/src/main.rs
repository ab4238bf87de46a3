// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use bounded_counter_core::atomic_cell::AtomicCell;
use bounded_counter_core::config::Config;
use bounded_counter_core::mutex_cell::MutexCell;
use bounded_counter_core::strategy::Strategy;
use bounded_counter_task_channels::types::TaskCounterRun;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let start_time = Instant::now();

    // Load configuration from JSON file
    let config = Config::load("config.json").expect("Failed to load config.json");

    println!("=== BOUNDED CONCURRENT COUNTER (tasks + channels) ===");
    config.print_summary();

    let strategies = match config.strategy {
        Some(strategy) => vec![strategy],
        None => vec![Strategy::Mutex, Strategy::Atomic],
    };

    for strategy in strategies {
        println!("\n=== {} STRATEGY ===", strategy.to_string().to_uppercase());

        for trial in 0..config.trials {
            let trial_start = Instant::now();

            let total = match strategy {
                Strategy::Mutex => {
                    let run = TaskCounterRun::launch(MutexCell::new(), config.num_units);
                    run.await_and_read().await
                }
                Strategy::Atomic => {
                    let run = TaskCounterRun::launch(AtomicCell::new(), config.num_units);
                    run.await_and_read().await
                }
            }
            .expect("Counter run failed");

            if total == config.num_units as u64 {
                println!(
                    "Trial {}: {} units -> total {} in {:?}",
                    trial,
                    config.num_units,
                    total,
                    trial_start.elapsed()
                );
            } else {
                eprintln!(
                    "⚠️  Trial {}: lost updates! Expected {}, got {}",
                    trial, config.num_units, total
                );
            }
        }
    }

    println!("\nTotal execution time: {:?}", start_time.elapsed());
}
