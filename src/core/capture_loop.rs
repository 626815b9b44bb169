//! The polling capture loop.
//!
//! One thread, blocking sleeps, no cancellation. Each iteration takes a fresh
//! clock reading and either finishes, captures a frame, or keeps waiting for
//! the window to open.

use crate::camera::{Camera, CameraError};
use crate::core::clock::Clock;
use crate::core::naming::{annotation_text, format_remaining, image_path};
use crate::core::window::{TimeWindow, WindowState};
use crate::stats::SharedCaptureStats;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Poll spacing while waiting for the window to open.
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Pause after starting the preview so the sensor can settle.
pub const PREVIEW_WARMUP: Duration = Duration::from_secs(2);

/// What a single loop iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    /// Window not open yet
    Waiting { remaining: chrono::Duration },
    /// Frame captured and found on disk
    Saved(PathBuf),
    /// Capture returned but no file appeared
    Missing(PathBuf),
    /// Bounded window has passed
    Done,
}

impl LoopEvent {
    pub fn is_done(&self) -> bool {
        matches!(self, LoopEvent::Done)
    }
}

impl std::fmt::Display for LoopEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopEvent::Waiting { remaining } => {
                write!(f, "Starting time lapse in {}", format_remaining(*remaining))
            }
            LoopEvent::Saved(path) => write!(f, "Saved image: {}", path.display()),
            LoopEvent::Missing(path) => write!(f, "Failed to save image: {}", path.display()),
            LoopEvent::Done => write!(f, "Done!"),
        }
    }
}

/// Drives a camera across a [`TimeWindow`].
pub struct CaptureLoop<C: Camera, K: Clock> {
    camera: C,
    clock: K,
    window: TimeWindow,
    outdir: PathBuf,
    stats: SharedCaptureStats,
    state: WindowState,
}

impl<C: Camera, K: Clock> CaptureLoop<C, K> {
    pub fn new(
        camera: C,
        clock: K,
        window: TimeWindow,
        outdir: impl Into<PathBuf>,
        stats: SharedCaptureStats,
    ) -> Self {
        let state = if clock.now() < window.start {
            WindowState::WaitingToStart
        } else {
            WindowState::Capturing
        };
        Self {
            camera,
            clock,
            window,
            outdir: outdir.into(),
            stats,
            state,
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Start the camera preview and let it warm up.
    pub fn start_camera(&mut self) -> Result<(), CameraError> {
        self.camera.start_preview()?;
        self.clock.sleep(PREVIEW_WARMUP);
        Ok(())
    }

    /// Run one iteration without its trailing sleep.
    ///
    /// Camera errors propagate; a capture that leaves no file is reported as
    /// [`LoopEvent::Missing`] and the loop carries on.
    pub fn poll(&mut self) -> Result<LoopEvent, CameraError> {
        if self.state == WindowState::Done {
            return Ok(LoopEvent::Done);
        }

        let now = self.clock.now();
        self.state = self.window.state_at(now);

        match self.state {
            WindowState::Done => {
                tracing::info!(end = ?self.window.end, "capture window closed");
                Ok(LoopEvent::Done)
            }
            WindowState::Capturing => {
                self.camera.set_annotate_text(&annotation_text(now));
                let path = image_path(&self.outdir, now);
                self.camera.capture(&path)?;

                if path.is_file() {
                    self.stats.record_captured();
                    Ok(LoopEvent::Saved(path))
                } else {
                    self.stats.record_failed();
                    tracing::warn!(path = %path.display(), "capture produced no file");
                    Ok(LoopEvent::Missing(path))
                }
            }
            WindowState::WaitingToStart => {
                self.stats.record_wait();
                Ok(LoopEvent::Waiting {
                    remaining: self.window.time_until_start(now),
                })
            }
        }
    }

    /// Sleep for as long as `event` calls for.
    pub fn pause_after(&self, event: &LoopEvent) {
        match event {
            LoopEvent::Waiting { .. } => self.clock.sleep(WAIT_POLL_INTERVAL),
            LoopEvent::Saved(_) | LoopEvent::Missing(_) => self.clock.sleep(self.window.interval),
            LoopEvent::Done => {}
        }
    }

    /// Loop until the window closes, handing each event to `report` before
    /// sleeping. Never returns `Ok` for an unbounded window.
    pub fn run_with<F>(&mut self, mut report: F) -> Result<(), CameraError>
    where
        F: FnMut(&LoopEvent),
    {
        loop {
            let event = self.poll()?;
            report(&event);
            if event.is_done() {
                return Ok(());
            }
            self.pause_after(&event);
        }
    }

    /// Loop until the window closes, printing each event to stdout.
    pub fn run(&mut self) -> Result<(), CameraError> {
        self.run_with(|event| println!("{event}"))
    }
}
