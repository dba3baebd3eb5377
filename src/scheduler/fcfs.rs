//! First-come-first-served scheduling.
//!
//! Non-preemptive: processes run to completion in arrival order, ties
//! broken by ascending pid. The CPU idles whenever the next process has
//! not yet arrived.

use crate::models::{ProcessRecord, Timeline};

/// Runs every process to completion in arrival order.
///
/// The timeline starts at the earliest arrival; an idle segment is
/// emitted whenever the next process's arrival exceeds the clock.
pub(super) fn schedule(records: &mut [ProcessRecord]) -> Timeline {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| (records[i].arrival_time, records[i].pid));

    let mut timeline = Timeline::new();
    let mut clock = match order.first() {
        Some(&i) => records[i].arrival_time,
        None => return timeline,
    };

    for &i in &order {
        let p = &mut records[i];
        if clock < p.arrival_time {
            timeline.push_idle(clock, p.arrival_time);
            clock = p.arrival_time;
        }

        let start = clock;
        clock += p.burst_time;
        p.run_slice(start, p.burst_time);
        timeline.push_run(p.pid, start, clock);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;

    fn run(records: &mut Vec<ProcessRecord>) -> Timeline {
        schedule(records.as_mut_slice())
    }

    #[test]
    fn test_arrival_order() {
        let mut records = vec![
            ProcessRecord::new(1, 0, 8),
            ProcessRecord::new(2, 1, 4),
            ProcessRecord::new(3, 2, 9),
            ProcessRecord::new(4, 3, 5),
            ProcessRecord::new(5, 4, 2),
        ];
        let timeline = run(&mut records);

        assert_eq!(timeline.execution_order(), vec![1, 2, 3, 4, 5]);
        let completions: Vec<i64> = records
            .iter()
            .map(|p| p.completion_time.unwrap())
            .collect();
        assert_eq!(completions, vec![8, 12, 21, 26, 28]);
    }

    #[test]
    fn test_idle_gap_between_arrivals() {
        let mut records = vec![ProcessRecord::new(1, 0, 2), ProcessRecord::new(2, 10, 3)];
        let timeline = run(&mut records);

        assert_eq!(timeline.segments[1], TimelineSegment::idle(2, 10));
        assert!(timeline.is_contiguous());
        assert_eq!(records[1].completion_time, Some(13));
    }

    #[test]
    fn test_pid_breaks_arrival_tie() {
        let mut records = vec![ProcessRecord::new(9, 5, 3), ProcessRecord::new(2, 5, 3)];
        let timeline = run(&mut records);
        assert_eq!(timeline.execution_order(), vec![2, 9]);
        assert_eq!(timeline.start_time(), Some(5));
    }

    #[test]
    fn test_late_first_arrival_starts_timeline() {
        let mut records = vec![ProcessRecord::new(1, 7, 2)];
        let timeline = run(&mut records);
        assert_eq!(timeline.start_time(), Some(7));
        assert_eq!(timeline.end_time(), Some(9));
        assert_eq!(timeline.idle_time(), 0);
    }
}
