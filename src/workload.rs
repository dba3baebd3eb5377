//! Workload construction.
//!
//! Provides the canonical demonstration process set plus a random
//! generator for producing larger inputs, e.g. for stress-testing the
//! policies against the engine's invariants. Generation is generic over
//! [`rand::Rng`] so tests can pass a seeded generator and stay
//! reproducible.

use rand::Rng;

use crate::models::ProcessRecord;

/// The classic five-process demonstration set: a mix of short and long
/// bursts, staggered arrivals, and spread-out priorities.
pub fn sample_processes() -> Vec<ProcessRecord> {
    vec![
        ProcessRecord::new(1, 0, 8).with_priority(3),
        ProcessRecord::new(2, 1, 4).with_priority(1),
        ProcessRecord::new(3, 2, 9).with_priority(4),
        ProcessRecord::new(4, 3, 5).with_priority(2),
        ProcessRecord::new(5, 4, 2).with_priority(5),
    ]
}

/// Shape of a randomly generated workload.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts are drawn uniformly from `min_burst..=max_burst`.
    pub min_burst: i64,
    /// Upper burst bound (inclusive).
    pub max_burst: i64,
    /// Priorities are drawn uniformly from `min_priority..=max_priority`.
    pub min_priority: i32,
    /// Upper priority bound (inclusive).
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 10,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the arrival window `0..=max_arrival`.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the priority range (inclusive).
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }
}

/// Generates a random process set with pids `1..=process_count`.
///
/// Pids are sequential so the output always passes validation; arrivals,
/// bursts, and priorities are drawn uniformly from the configured ranges.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<ProcessRecord> {
    (1..=config.process_count)
        .map(|pid| {
            ProcessRecord::new(
                pid as u32,
                rng.random_range(0..=config.max_arrival),
                rng.random_range(config.min_burst..=config.max_burst),
            )
            .with_priority(rng.random_range(config.min_priority..=config.max_priority))
        })
        .collect()
}
