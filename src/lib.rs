//! Deterministic CPU scheduling simulation.
//!
//! Simulates the classic single-CPU scheduling disciplines over a static
//! process set and produces the exact execution timeline plus per-process
//! completion, turnaround, and waiting times. This is a discrete-event
//! computation, not a live scheduler — no real concurrency, and running
//! the same policy twice on the same input is byte-for-byte reproducible.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `Timeline`,
//!   `TimelineSegment`, `SegmentLabel`
//! - **`scheduler`**: The engine — `SchedulingPolicy`, `run`,
//!   `compare_policies`, `SimulationResult`, `SimulationMetrics`
//! - **`validation`**: Input integrity checks (duplicate pids,
//!   non-positive bursts, invalid quantum)
//! - **`workload`**: Canonical demo process set and random workload
//!   generation
//!
//! # Example
//!
//! ```
//! use cpu_sched::scheduler::{self, SchedulingPolicy};
//! use cpu_sched::workload;
//!
//! let processes = workload::sample_processes();
//! let result = scheduler::run(SchedulingPolicy::Fcfs, &processes).unwrap();
//! assert_eq!(result.metrics.per_process[&1].completion_time, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
