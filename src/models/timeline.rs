//! Execution timeline (solution) model.
//!
//! A timeline is the Gantt-chart record of one simulation run: an ordered
//! sequence of segments saying which process held the CPU over each
//! interval, with idle intervals recorded explicitly. Chart rendering
//! maps each segment to one bar at `[start, end]`; idle segments render
//! as gaps or a neutral color.

use serde::{Deserialize, Serialize};

use super::Pid;

/// What occupied the CPU during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentLabel {
    /// A process was executing.
    Process(Pid),
    /// No arrived, incomplete process existed; the CPU sat idle.
    Idle,
}

impl SegmentLabel {
    /// Whether this is an idle segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, SegmentLabel::Idle)
    }

    /// The executing pid, if any.
    #[inline]
    pub fn pid(&self) -> Option<Pid> {
        match self {
            SegmentLabel::Process(pid) => Some(*pid),
            SegmentLabel::Idle => None,
        }
    }
}

/// One contiguous CPU interval, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Occupant of the CPU.
    pub label: SegmentLabel,
    /// Interval start tick (inclusive).
    pub start: i64,
    /// Interval end tick (exclusive).
    pub end: i64,
}

impl TimelineSegment {
    /// Creates an execution segment for a process.
    pub fn process(pid: Pid, start: i64, end: i64) -> Self {
        Self {
            label: SegmentLabel::Process(pid),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            label: SegmentLabel::Idle,
            start,
            end,
        }
    }

    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A complete execution timeline for one run.
///
/// Segments are appended in simulation order, so for a well-formed run
/// they are contiguous and non-overlapping, tiling the interval from the
/// earliest arrival to the latest completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in execution order.
    pub segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution segment for `pid` over `[start, end)`.
    pub fn push_run(&mut self, pid: Pid, start: i64, end: i64) {
        self.segments.push(TimelineSegment::process(pid, start, end));
    }

    /// Appends an idle segment over `[start, end)`.
    pub fn push_idle(&mut self, start: i64, end: i64) {
        self.segments.push(TimelineSegment::idle(start, end));
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment.
    pub fn start_time(&self) -> Option<i64> {
        self.segments.first().map(|s| s.start)
    }

    /// End of the last segment.
    pub fn end_time(&self) -> Option<i64> {
        self.segments.last().map(|s| s.end)
    }

    /// Total ticks the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.label.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Total ticks the CPU sat idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.label.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Fraction of the covered span spent executing (0.0..1.0).
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let span = self.end_time()? - self.start_time()?;
        if span <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / span as f64)
    }

    /// All segments during which `pid` executed.
    pub fn segments_for(&self, pid: Pid) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.label.pid() == Some(pid))
            .collect()
    }

    /// Pids in execution order, one entry per non-idle segment.
    pub fn execution_order(&self) -> Vec<Pid> {
        self.segments.iter().filter_map(|s| s.label.pid()).collect()
    }

    /// Whether every segment has positive length and starts exactly where
    /// the previous one ended (no gaps, no overlaps).
    pub fn is_contiguous(&self) -> bool {
        self.segments.iter().all(|s| s.start < s.end)
            && self
                .segments
                .windows(2)
                .all(|w| w[0].end == w[1].start)
    }
}
