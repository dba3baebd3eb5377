//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set before any simulation
//! proceeds. Detects:
//! - Empty process sets
//! - Duplicate pids
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive round-robin quanta
//!
//! All problems are collected and reported together; validation never
//! fails on the first defect found.

use crate::models::{Pid, ProcessRecord};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, when the defect is tied to one.
    pub pid: Option<Pid>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set contains no processes.
    EmptyProcessSet,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process has a burst time of zero or less.
    NonPositiveBurstTime,
    /// A process has a negative arrival time.
    NegativeArrivalTime,
    /// The round-robin quantum is zero or less.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pid: Option<Pid>, message: impl Into<String>) -> Self {
        Self {
            kind,
            pid,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set (and quantum, when one applies).
///
/// Checks:
/// 1. The set is non-empty
/// 2. No duplicate pids
/// 3. Every burst time is positive
/// 4. Every arrival time is non-negative
/// 5. The quantum, if given, is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessRecord], quantum: Option<i64>) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            None,
            "Process set is empty",
        ));
    }

    let mut seen = HashSet::new();
    for p in processes {
        if !seen.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                Some(p.pid),
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurstTime,
                Some(p.pid),
                format!(
                    "Process {} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                Some(p.pid),
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }
    }

    if let Some(q) = quantum {
        if q <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                None,
                format!("Round-robin quantum must be positive, got {q}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 8).with_priority(3),
            ProcessRecord::new(2, 1, 4).with_priority(1),
            ProcessRecord::new(3, 2, 9).with_priority(4),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes(), None).is_ok());
        assert!(validate_processes(&sample_processes(), Some(4)).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[], None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![ProcessRecord::new(7, 0, 3), ProcessRecord::new(7, 1, 5)];
        let errors = validate_processes(&processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid && e.pid == Some(7)));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![ProcessRecord::new(1, 0, 0)];
        let errors = validate_processes(&processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurstTime && e.pid == Some(1)));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessRecord::new(2, -1, 4)];
        let errors = validate_processes(&processes, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrivalTime && e.pid == Some(2)));
    }

    #[test]
    fn test_non_positive_quantum() {
        let errors = validate_processes(&sample_processes(), Some(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let processes = vec![
            ProcessRecord::new(1, -2, 0), // Negative arrival + zero burst
            ProcessRecord::new(1, 0, 3),  // Duplicate pid
        ];
        let errors = validate_processes(&processes, Some(-1)).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
