//! Atomic capture counters.

use chrono::{Local, NaiveDateTime};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for the current run.
#[derive(Debug)]
pub struct CaptureStats {
    /// Frames confirmed on disk
    captured: AtomicU64,
    /// Captures that left no file behind
    failed: AtomicU64,
    /// Polls spent waiting for the window to open
    waits: AtomicU64,
    session_start: NaiveDateTime,
}

impl CaptureStats {
    pub fn new() -> Self {
        Self::starting_at(Local::now().naive_local())
    }

    /// Create counters for a session that began at `session_start`.
    pub fn starting_at(session_start: NaiveDateTime) -> Self {
        Self {
            captured: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            waits: AtomicU64::new(0),
            session_start,
        }
    }

    pub fn record_captured(&self) {
        self.captured.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_wait(&self) {
        self.waits.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters as of `now`.
    pub fn stats_at(&self, now: NaiveDateTime) -> SessionStats {
        SessionStats {
            captured: self.captured.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            waits: self.waits.load(Ordering::Relaxed),
            session_start: self.session_start,
            session_duration_secs: (now - self.session_start).num_seconds().max(0) as u64,
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats_at(Local::now().naive_local())
    }

    /// Summary block printed when the run ends.
    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "Session Statistics:\n\
             - Images saved: {}\n\
             - Failed captures: {}\n\
             - Session duration: {} seconds",
            stats.captured, stats.failed, stats.session_duration_secs
        )
    }
}

impl Default for CaptureStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of [`CaptureStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub captured: u64,
    pub failed: u64,
    pub waits: u64,
    pub session_start: NaiveDateTime,
    pub session_duration_secs: u64,
}

impl SessionStats {
    pub fn attempts(&self) -> u64 {
        self.captured + self.failed
    }
}

/// Thread-safe shared counters.
pub type SharedCaptureStats = Arc<CaptureStats>;

pub fn create_shared_stats() -> SharedCaptureStats {
    Arc::new(CaptureStats::new())
}
