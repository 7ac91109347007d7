//! Filter statistics
//!
//! Atomic counters shared by every application of a compiled
//! [`FieldFilter`](crate::filter::FieldFilter).

mod stats;

pub use stats::{FilterStats, StatsSnapshot};
