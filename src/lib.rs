//! pilapse - interval time-lapse capture for Raspberry Pi cameras.
//!
//! Captures a photo every interval between a start and an optional end time,
//! naming each file after its capture time and stamping that time onto the
//! frame.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         pilapse                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐     │
//! │  │   Config    │──▶│   Window    │──▶│ CaptureLoop │     │
//! │  │   (CLI)     │   │  (resolve)  │   │  (polling)  │     │
//! │  └─────────────┘   └─────────────┘   └─────────────┘     │
//! │                                        │         │       │
//! │                                        ▼         ▼       │
//! │                                 ┌──────────┐ ┌───────┐   │
//! │                                 │  Camera  │ │ Stats │   │
//! │                                 └──────────┘ └───────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pilapse::{camera, config::CaptureConfig, core, stats};
//! use pilapse::core::Clock;
//!
//! let config = CaptureConfig::default();
//! let clock = core::SystemClock;
//! let resolved = core::resolve(&config, clock.now()).expect("valid window");
//!
//! let mut capture = core::CaptureLoop::new(
//!     camera::TestPatternCamera::default(),
//!     clock,
//!     resolved.window,
//!     &config.outdir,
//!     stats::create_shared_stats(),
//! );
//! capture.start_camera().expect("camera");
//! capture.run().expect("capture loop");
//! ```

pub mod camera;
pub mod config;
pub mod core;
pub mod stats;

// Re-export key types at crate root for convenience
pub use crate::camera::{Camera, CameraError, CameraKind, StillCommandCamera, TestPatternCamera};
pub use crate::config::{CaptureConfig, ConfigError, TimeUnit};
pub use crate::core::{CaptureLoop, Clock, LoopEvent, SystemClock, TimeWindow, WindowState};
pub use crate::stats::{CaptureStats, SharedCaptureStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
