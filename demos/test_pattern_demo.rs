//! Demonstration of a short time lapse without camera hardware.
//!
//! This example shows how to:
//! 1. Resolve a capture window from a config
//! 2. Drive the capture loop with the test-pattern camera
//! 3. Read the session statistics afterwards
//!
//! Run with: cargo run --example test_pattern_demo [OUTDIR]
//!
//! Frames are written to OUTDIR (default: a `pilapse-demo` directory under the
//! system temp dir). The demo runs in real time for about five seconds.

use pilapse::{
    camera::TestPatternCamera,
    config::{CaptureConfig, TimeUnit},
    core::{self, CaptureLoop, Clock, SystemClock},
    stats::create_shared_stats,
};
use std::path::PathBuf;

fn main() {
    println!("pilapse - Test Pattern Demo");
    println!("===========================");

    let outdir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("pilapse-demo"));

    let config = CaptureConfig {
        outdir,
        start: None,
        duration: 4.0,
        interval: 1.0,
        unit: TimeUnit::Seconds,
    };

    if let Err(e) = config.ensure_directories() {
        eprintln!("Error: {e}");
        return;
    }

    let clock = SystemClock;
    let resolved = match core::resolve(&config, clock.now()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    println!();
    println!("{}", core::summary(&config, &resolved.window));
    println!();

    let stats = create_shared_stats();
    let mut capture = CaptureLoop::new(
        TestPatternCamera::new(320, 240),
        clock,
        resolved.window,
        &config.outdir,
        stats.clone(),
    );

    // Skip start_camera(): the test pattern needs no warm-up and the window
    // is short.
    if let Err(e) = capture.run() {
        eprintln!("Capture failed: {e}");
    }

    println!();
    println!("{}", stats.summary());
    println!("Frames rendered: {}", capture.camera().frames());
}
