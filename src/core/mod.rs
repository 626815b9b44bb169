//! Core functionality for pilapse.
//!
//! This module contains:
//! - Window resolution from CLI values to absolute timestamps
//! - File name and annotation formatting
//! - The clock abstraction and the polling capture loop

pub mod capture_loop;
pub mod clock;
pub mod naming;
pub mod window;

// Re-export commonly used types
pub use capture_loop::{CaptureLoop, LoopEvent, PREVIEW_WARMUP, WAIT_POLL_INTERVAL};
pub use clock::{Clock, SimulatedClock, SystemClock};
pub use naming::{annotation_text, display_timestamp, format_remaining, image_filename, image_path};
pub use window::{resolve, summary, ResolvedWindow, TimeWindow, WindowState};
