//! Scheduling policy selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scheduling discipline for one simulation run.
///
/// The four disciplines share one entry point ([`super::run`]); the
/// quantum is carried on the variant because it is only meaningful for
/// round robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingPolicy {
    /// First-come-first-served: non-preemptive, arrival order.
    Fcfs,
    /// Shortest-job-first: non-preemptive, smallest burst among arrived.
    Sjf,
    /// Priority: non-preemptive, smallest priority value among arrived.
    /// No aging — a low-priority process may starve indefinitely while
    /// higher-priority processes keep arriving.
    Priority,
    /// Round robin: preemptive, FIFO ready queue with a fixed quantum.
    RoundRobin {
        /// Maximum contiguous CPU time granted per turn (> 0).
        quantum: i64,
    },
}

impl SchedulingPolicy {
    /// Short policy name, suitable for table headers.
    pub fn name(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "FCFS",
            SchedulingPolicy::Sjf => "SJF",
            SchedulingPolicy::Priority => "Priority",
            SchedulingPolicy::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, SchedulingPolicy::RoundRobin { .. })
    }

    /// The quantum, for the policy that has one.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            SchedulingPolicy::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingPolicy::RoundRobin { quantum } => {
                write!(f, "Round Robin (quantum = {quantum})")
            }
            other => f.write_str(other.name()),
        }
    }
}
