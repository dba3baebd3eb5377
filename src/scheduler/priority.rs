//! Priority scheduling (non-preemptive).
//!
//! Same decision loop as shortest-job-first, but the selection criterion
//! is the smallest priority value among arrived, incomplete processes
//! (lower value = higher priority). There is no aging: a low-priority
//! process starves for as long as higher-priority work keeps arriving,
//! and that is accepted behavior rather than a defect.

use crate::models::{ProcessRecord, Timeline};

/// Runs processes to completion, always picking the smallest priority
/// value among those that have arrived. Ties break by arrival time,
/// then pid.
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
            .min_by_key(|(_, p)| (p.priority, p.arrival_time, p.pid));

        let Some((i, _)) = next else {
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
