//! Round-robin scheduling (preemptive).
//!
//! Processes share the CPU through a FIFO ready queue: each dequeued
//! process runs for at most one quantum, then rejoins the tail if it
//! still has work left.
//!
//! # Enqueue order
//!
//! Processes arriving during a slice — anywhere in `(old_clock, new_clock]` —
//! join the queue *before* the preempted process re-enters, in ascending
//! arrival time then pid. Reversing this produces a different, equally
//! plausible timeline, so the ordering here is the contract and is pinned
//! by an explicit test.

use std::collections::VecDeque;

use crate::models::{ProcessRecord, Timeline};

/// Enqueues every not-yet-admitted process with `arrival_time <= up_to`,
/// advancing the admission cursor. `order` is sorted by arrival then pid,
/// so admissions come out in that order.
fn admit(
    records: &[ProcessRecord],
    order: &[usize],
    cursor: &mut usize,
    ready: &mut VecDeque<usize>,
    up_to: i64,
) {
    while *cursor < order.len() && records[order[*cursor]].arrival_time <= up_to {
        ready.push_back(order[*cursor]);
        *cursor += 1;
    }
}

/// Runs processes with a FIFO ready queue and a fixed quantum.
pub(super) fn schedule(records: &mut [ProcessRecord], quantum: i64) -> Timeline {
    let mut timeline = Timeline::new();

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| (records[i].arrival_time, records[i].pid));

    let mut clock = match order.first() {
        Some(&i) => records[i].arrival_time,
        None => return timeline,
    };

    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut cursor = 0;
    admit(records, &order, &mut cursor, &mut ready, clock);

    while let Some(i) = ready.pop_front() {
        let p = &mut records[i];
        let slice = quantum.min(p.remaining_time);
        let start = clock;
        clock += slice;
        p.run_slice(start, slice);
        timeline.push_run(p.pid, start, clock);

        // Arrivals during the slice enter ahead of the preempted process.
        admit(records, &order, &mut cursor, &mut ready, clock);
        if !records[i].is_complete() {
            ready.push_back(i);
        }

        if ready.is_empty() && cursor < order.len() {
            // Queue drained with work still pending: idle until the next
            // arrival, which may bring simultaneous companions with it.
            let next_arrival = records[order[cursor]].arrival_time;
            timeline.push_idle(clock, next_arrival);
            clock = next_arrival;
            admit(records, &order, &mut cursor, &mut ready, clock);
        }
    }

    timeline
}
