//! Simulation domain models.
//!
//! Provides the data types for describing a scheduling problem (the
//! process set) and its solution (the execution timeline). Policy logic
//! lives in [`crate::scheduler`]; these types carry no selection or
//! preemption decisions of their own.

mod process;
mod timeline;

pub use process::{Pid, ProcessRecord};
pub use timeline::{SegmentLabel, Timeline, TimelineSegment};
