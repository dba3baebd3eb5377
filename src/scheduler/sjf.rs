//! Shortest-job-first scheduling (non-preemptive).
//!
//! At each decision point — initially, and whenever the CPU becomes free —
//! the arrived, incomplete process with the smallest burst time runs to
//! completion. A shorter process arriving mid-burst does not interrupt
//! the running one.

use crate::models::{ProcessRecord, Timeline};

/// Runs processes to completion, always picking the smallest burst among
/// those that have arrived. Ties break by arrival time, then pid.
pub(super) fn schedule(records: &mut [ProcessRecord]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock = match records.iter().map(|p| p.arrival_time).min() {
        Some(t) => t,
        None => return timeline,
    };
    let mut completed = 0;

    while completed < records.len() {
        let next = records
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_complete() && p.arrival_time <= clock)
            .min_by_key(|(_, p)| (p.burst_time, p.arrival_time, p.pid));

        let Some((i, _)) = next else {
            // Ready set empty; jump to the earliest pending arrival.
            let next_arrival = records
                .iter()
                .filter(|p| !p.is_complete())
                .map(|p| p.arrival_time)
                .min()
                .unwrap_or(clock);
            timeline.push_idle(clock, next_arrival);
            clock = next_arrival;
            continue;
        };

        let p = &mut records[i];
        let start = clock;
        clock += p.burst_time;
        p.run_slice(start, p.burst_time);
        timeline.push_run(p.pid, start, clock);
        completed += 1;
    }

    timeline
}
