//! The scheduling engine.
//!
//! One entry point, [`run`], drives all four disciplines: validate the
//! input, simulate on private copies of the records, verify the produced
//! timeline, and derive metrics. [`compare_policies`] runs every
//! discipline over the same input for side-by-side evaluation.
//!
//! Each run is a pure transformation of the input process list. The
//! caller's records are never mutated, so comparing policies over one
//! input set is order-independent and repeat runs are identical.

mod fcfs;
mod metrics;
mod policy;
mod priority;
mod round_robin;
mod sjf;

pub use metrics::{ProcessMetrics, SimulationMetrics};
pub use policy::SchedulingPolicy;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ProcessRecord, Timeline};
use crate::validation::{self, ValidationError};

/// Why a simulation run failed.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set or parameters were rejected before simulation
    /// started. Carries every detected problem.
    InvalidInput(Vec<ValidationError>),
    /// The engine produced an impossible schedule (negative waiting time,
    /// gap or overlap in the timeline). Unreachable from valid input; a
    /// run that hits this returns no partial result.
    InvariantViolation {
        /// What was violated.
        message: String,
    },
}

impl SimulationError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        SimulationError::InvariantViolation {
            message: message.into(),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {e}")?;
                }
                Ok(())
            }
            SimulationError::InvariantViolation { message } => {
                write!(f, "simulation invariant violated: {message}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// The outcome of one simulation run.
///
/// Immutable once returned and owned solely by the caller. Table
/// rendering iterates `metrics.per_process`; chart rendering iterates
/// `timeline.segments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The discipline that produced this run.
    pub policy: SchedulingPolicy,
    /// Execution timeline, idle intervals included.
    pub timeline: Timeline,
    /// Per-process and system-wide metrics.
    pub metrics: SimulationMetrics,
}

/// Simulates `processes` under `policy`.
///
/// Validation happens before any simulation: an empty set, a duplicate
/// pid, a non-positive burst time or quantum, or a negative arrival time
/// is rejected as [`SimulationError::InvalidInput`] with the offending
/// pids attached.
///
/// The input slice is copied and reset per run, so the caller's records
/// are never mutated and repeat invocations yield identical results.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessRecord;
/// use cpu_sched::scheduler::{self, SchedulingPolicy};
///
/// let processes = vec![
///     ProcessRecord::new(1, 0, 8),
///     ProcessRecord::new(2, 1, 4),
/// ];
/// let result = scheduler::run(SchedulingPolicy::RoundRobin { quantum: 4 }, &processes).unwrap();
/// assert_eq!(result.timeline.execution_order(), vec![1, 2, 1]);
/// ```
pub fn run(
    policy: SchedulingPolicy,
    processes: &[ProcessRecord],
) -> Result<SimulationResult, SimulationError> {
    validation::validate_processes(processes, policy.quantum())
        .map_err(SimulationError::InvalidInput)?;

    // Simulate on private, freshly reset copies so no state leaks in
    // from a prior run of the caller's records.
    let mut records = processes.to_vec();
    for r in &mut records {
        r.reset();
    }

    let timeline = match policy {
        SchedulingPolicy::Fcfs => fcfs::schedule(&mut records),
        SchedulingPolicy::Sjf => sjf::schedule(&mut records),
        SchedulingPolicy::Priority => priority::schedule(&mut records),
        SchedulingPolicy::RoundRobin { quantum } => round_robin::schedule(&mut records, quantum),
    };

    verify_timeline(&timeline, &records)?;
    let metrics = SimulationMetrics::calculate(&records, &timeline)?;

    Ok(SimulationResult {
        policy,
        timeline,
        metrics,
    })
}

/// Runs all four disciplines over the same input.
///
/// Each run operates on its own copy of the records, so the results are
/// independent of invocation order. `quantum` applies to the round-robin
/// run only.
pub fn compare_policies(
    processes: &[ProcessRecord],
    quantum: i64,
) -> Result<Vec<SimulationResult>, SimulationError> {
    [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Sjf,
        SchedulingPolicy::Priority,
        SchedulingPolicy::RoundRobin { quantum },
    ]
    .into_iter()
    .map(|policy| run(policy, processes))
    .collect()
}

/// Checks that the timeline exactly tiles the interval from the earliest
/// arrival to the latest completion, with no gaps or overlaps.
fn verify_timeline(
    timeline: &Timeline,
    records: &[ProcessRecord],
) -> Result<(), SimulationError> {
    if !timeline.is_contiguous() {
        return Err(SimulationError::invariant(
            "timeline has a gap, overlap, or empty segment",
        ));
    }

    let first_arrival = records.iter().map(|p| p.arrival_time).min();
    if timeline.start_time() != first_arrival {
        return Err(SimulationError::invariant(
            "timeline does not start at the earliest arrival",
        ));
    }

    let last_completion = records.iter().filter_map(|p| p.completion_time).max();
    if timeline.end_time() != last_completion {
        return Err(SimulationError::invariant(
            "timeline does not end at the latest completion",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload;

    fn all_policies() -> Vec<SchedulingPolicy> {
        vec![
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::Sjf,
            SchedulingPolicy::Priority,
            SchedulingPolicy::RoundRobin { quantum: 4 },
        ]
    }

    #[test]
    fn test_fcfs_reference_averages() {
        let result = run(SchedulingPolicy::Fcfs, &workload::sample_processes()).unwrap();
        assert!((result.metrics.avg_waiting_time - 11.40).abs() < 1e-10);
        assert!((result.metrics.avg_turnaround_time - 17.00).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_and_turnaround_bounds_all_policies() {
        let processes = workload::sample_processes();
        for policy in all_policies() {
            let result = run(policy, &processes).unwrap();
            for m in result.metrics.per_process.values() {
                assert!(m.waiting_time >= 0, "{policy}: pid {}", m.pid);
                assert!(m.turnaround_time >= m.burst_time, "{policy}: pid {}", m.pid);
            }
        }
    }

    #[test]
    fn test_timeline_tiles_span_all_policies() {
        let processes = vec![
            crate::models::ProcessRecord::new(1, 3, 4),
            crate::models::ProcessRecord::new(2, 0, 2),
            crate::models::ProcessRecord::new(3, 12, 5).with_priority(1),
        ];
        for policy in all_policies() {
            let result = run(policy, &processes).unwrap();
            assert!(result.timeline.is_contiguous(), "{policy}");
            assert_eq!(result.timeline.start_time(), Some(0), "{policy}");
            assert_eq!(result.timeline.end_time(), Some(17), "{policy}");
        }
    }

    #[test]
    fn test_input_not_mutated_and_runs_idempotent() {
        let processes = workload::sample_processes();
        let snapshot = processes.clone();

        for policy in all_policies() {
            let first = run(policy, &processes).unwrap();
            let second = run(policy, &processes).unwrap();
            assert_eq!(first, second, "{policy}");
        }
        assert_eq!(processes, snapshot);
    }

    #[test]
    fn test_dirty_input_records_are_reset() {
        // Leftover per-run state on the caller's records must not leak in.
        let mut processes = workload::sample_processes();
        processes[0].remaining_time = 1;
        processes[0].completion_time = Some(99);
        processes[0].start_time = Some(42);

        let result = run(SchedulingPolicy::Fcfs, &processes).unwrap();
        assert_eq!(result.metrics.per_process[&1].completion_time, 8);
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = run(SchedulingPolicy::Fcfs, &[]).unwrap_err();
        let SimulationError::InvalidInput(errors) = err else {
            panic!("expected InvalidInput");
        };
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_bad_quantum_rejected_before_simulation() {
        let err = run(
            SchedulingPolicy::RoundRobin { quantum: 0 },
            &workload::sample_processes(),
        )
        .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_duplicate_pid_rejected() {
        let processes = vec![
            crate::models::ProcessRecord::new(1, 0, 2),
            crate::models::ProcessRecord::new(1, 1, 3),
        ];
        for policy in all_policies() {
            assert!(matches!(
                run(policy, &processes),
                Err(SimulationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_compare_policies_covers_all_four() {
        let results = compare_policies(&workload::sample_processes(), 4).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].policy, SchedulingPolicy::Fcfs);
        assert_eq!(results[3].policy, SchedulingPolicy::RoundRobin { quantum: 4 });
        // Every run covers the same span over the same input.
        for r in &results {
            assert_eq!(r.timeline.start_time(), Some(0));
            assert_eq!(r.timeline.end_time(), Some(28));
        }
    }

    #[test]
    fn test_random_workloads_satisfy_invariants() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(2024);
        let config = workload::WorkloadConfig::default().with_process_count(30);

        for _ in 0..20 {
            let processes = workload::generate(&config, &mut rng);
            for quantum in [1, 3, 7] {
                let results = compare_policies(&processes, quantum).unwrap();
                for result in results {
                    assert!(result.timeline.is_contiguous(), "{}", result.policy);
                    for m in result.metrics.per_process.values() {
                        assert!(m.waiting_time >= 0);
                        assert!(m.turnaround_time >= m.burst_time);
                        assert!(m.completion_time >= m.arrival_time + m.burst_time);
                    }
                }
            }
        }
    }

    #[test]
    fn test_result_serializes_for_presentation() {
        let result = run(SchedulingPolicy::Sjf, &workload::sample_processes()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
