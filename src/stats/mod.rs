//! Session statistics for a time-lapse run.
//!
//! Counters are shared with the Ctrl+C handler so an interrupted run can still
//! report what it captured.

pub mod counters;

pub use counters::{create_shared_stats, CaptureStats, SessionStats, SharedCaptureStats};
