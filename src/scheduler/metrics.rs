//! Per-run performance metrics.
//!
//! Derives the standard scheduling indicators from a set of completed
//! process records and the run's timeline. Policy-agnostic: every
//! discipline feeds the same calculation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround time | completion - arrival |
//! | Waiting time | turnaround - burst |
//! | Response time | first CPU receipt - arrival |
//! | Makespan | first arrival to last completion |
//! | CPU utilization | busy ticks / covered span |
//!
//! Averages are arithmetic means computed in `f64`; nothing is rounded
//! until display.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SimulationError;
use crate::models::{Pid, ProcessRecord, Timeline};

/// Metrics for a single completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: Pid,
    /// Input arrival time.
    pub arrival_time: i64,
    /// Input burst time.
    pub burst_time: i64,
    /// Input priority.
    pub priority: i32,
    /// First tick the process held the CPU.
    pub start_time: i64,
    /// Ticks between arrival and first CPU receipt.
    pub response_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst; time spent ready but not running.
    pub waiting_time: i64,
}

/// System-wide metrics for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Per-process metrics, keyed by pid in ascending order.
    pub per_process: BTreeMap<Pid, ProcessMetrics>,
    /// Arithmetic mean of waiting times.
    pub avg_waiting_time: f64,
    /// Arithmetic mean of turnaround times.
    pub avg_turnaround_time: f64,
    /// Span from the first arrival to the last completion.
    pub makespan: i64,
    /// Fraction of the makespan the CPU spent executing (0.0..1.0).
    pub cpu_utilization: f64,
}

impl SimulationMetrics {
    /// Computes metrics for a finished run.
    ///
    /// Every record must be complete. A negative waiting time means the
    /// engine produced an impossible schedule and is reported as an
    /// invariant violation rather than folded into the averages.
    pub fn calculate(
        records: &[ProcessRecord],
        timeline: &Timeline,
    ) -> Result<Self, SimulationError> {
        let mut per_process = BTreeMap::new();
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;

        for p in records {
            let (completion_time, start_time) = match (p.completion_time, p.start_time) {
                (Some(c), Some(s)) => (c, s),
                _ => {
                    return Err(SimulationError::invariant(format!(
                        "process {} never completed",
                        p.pid
                    )))
                }
            };

            let turnaround_time = completion_time - p.arrival_time;
            let waiting_time = turnaround_time - p.burst_time;
            if waiting_time < 0 {
                return Err(SimulationError::invariant(format!(
                    "process {} has negative waiting time {}",
                    p.pid, waiting_time
                )));
            }

            total_waiting += waiting_time;
            total_turnaround += turnaround_time;
            per_process.insert(
                p.pid,
                ProcessMetrics {
                    pid: p.pid,
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    priority: p.priority,
                    start_time,
                    response_time: start_time - p.arrival_time,
                    completion_time,
                    turnaround_time,
                    waiting_time,
                },
            );
        }

        let n = records.len().max(1) as f64;
        let makespan = timeline
            .end_time()
            .unwrap_or(0)
            .saturating_sub(timeline.start_time().unwrap_or(0));

        Ok(Self {
            per_process,
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            makespan,
            cpu_utilization: timeline.cpu_utilization().unwrap_or(0.0),
        })
    }
}
