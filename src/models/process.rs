//! Process model.
//!
//! A process is the unit of work the simulated CPU executes: static
//! inputs (arrival time, burst time, priority) plus the bookkeeping
//! fields a policy fills in while it runs.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The consumer defines what one tick means.

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type Pid = u32;

/// A process to be scheduled.
///
/// The input fields (`pid`, `arrival_time`, `burst_time`, `priority`) are
/// immutable once constructed; the remaining fields are mutated by a
/// policy during a run and restored by [`reset`](Self::reset). The engine
/// always simulates on its own copies, so caller-owned records are never
/// mutated by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub pid: Pid,
    /// Tick at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Scheduling priority; lower value = higher priority. Only the
    /// priority policy reads this.
    pub priority: i32,
    /// CPU time still required. Initialized to `burst_time`, decremented
    /// as the process executes, never negative.
    pub remaining_time: i64,
    /// Tick at which `remaining_time` reached zero. Set exactly once.
    pub completion_time: Option<i64>,
    /// Tick at which the process first received the CPU.
    pub start_time: Option<i64>,
}

impl ProcessRecord {
    /// Creates a process with priority 0.
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            completion_time: None,
            start_time: None,
        }
    }

    /// Sets the priority (lower = scheduled first under the priority policy).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restores the per-run fields to their pre-simulation state.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
        self.start_time = None;
    }

    /// Whether the process has finished executing.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Executes the process for `duration` ticks starting at `start`.
    ///
    /// Records the first CPU receipt, decrements the remaining time, and
    /// stamps the completion time when the remaining time reaches zero.
    /// `duration` must not exceed `remaining_time`.
    pub fn run_slice(&mut self, start: i64, duration: i64) {
        debug_assert!(duration > 0 && duration <= self.remaining_time);
        if self.start_time.is_none() {
            self.start_time = Some(start);
        }
        self.remaining_time -= duration;
        if self.remaining_time == 0 {
            self.completion_time = Some(start + duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initializes_remaining() {
        let p = ProcessRecord::new(1, 3, 7).with_priority(2);
        assert_eq!(p.pid, 1);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.completion_time, None);
        assert_eq!(p.start_time, None);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_run_slice_partial_then_complete() {
        let mut p = ProcessRecord::new(1, 0, 5);
        p.run_slice(2, 3);
        assert_eq!(p.start_time, Some(2));
        assert_eq!(p.remaining_time, 2);
        assert_eq!(p.completion_time, None);

        p.run_slice(9, 2);
        // Start time is first CPU receipt, not the last slice.
        assert_eq!(p.start_time, Some(2));
        assert!(p.is_complete());
        assert_eq!(p.completion_time, Some(11));
    }

    #[test]
    fn test_reset_restores_inputs() {
        let mut p = ProcessRecord::new(4, 1, 6).with_priority(9);
        p.run_slice(1, 6);
        assert!(p.is_complete());

        p.reset();
        assert_eq!(p.remaining_time, 6);
        assert_eq!(p.completion_time, None);
        assert_eq!(p.start_time, None);
        assert_eq!(p.priority, 9);
    }
}
