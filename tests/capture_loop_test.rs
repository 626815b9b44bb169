//! Integration tests for the capture loop

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pilapse::camera::{Camera, CameraError};
use pilapse::config::{CaptureConfig, TimeUnit};
use pilapse::core::{resolve, CaptureLoop, Clock, LoopEvent, SimulatedClock, WindowState};
use pilapse::stats::create_shared_stats;
use std::path::{Path, PathBuf};

/// Records every call and writes an empty file unless told to drop frames.
#[derive(Default)]
struct RecordingCamera {
    previews: usize,
    annotations: Vec<String>,
    captures: Vec<PathBuf>,
    drop_frames: bool,
    fail_after: Option<usize>,
}

impl Camera for RecordingCamera {
    fn start_preview(&mut self) -> Result<(), CameraError> {
        self.previews += 1;
        Ok(())
    }

    fn set_annotate_text(&mut self, text: &str) {
        self.annotations.push(text.to_string());
    }

    fn capture(&mut self, path: &Path) -> Result<(), CameraError> {
        if self.fail_after == Some(self.captures.len()) {
            return Err(CameraError::Encode("sensor unplugged".to_string()));
        }
        self.captures.push(path.to_path_buf());
        if !self.drop_frames {
            std::fs::write(path, b"jpeg").map_err(|e| CameraError::Encode(e.to_string()))?;
        }
        Ok(())
    }
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn seconds_config(start: Option<NaiveDateTime>, duration: f64, outdir: &Path) -> CaptureConfig {
    CaptureConfig {
        outdir: outdir.to_path_buf(),
        start,
        duration,
        interval: 1.0,
        unit: TimeUnit::Seconds,
    }
}

#[test]
fn test_delayed_bounded_run() {
    let tmp = tempfile::tempdir().unwrap();
    let now = at(12, 0, 0);
    let clock = SimulatedClock::new(now);
    let config = seconds_config(Some(now + Duration::seconds(10)), 5.0, tmp.path());
    let resolved = resolve(&config, clock.now()).unwrap();
    let stats = create_shared_stats();

    let mut capture = CaptureLoop::new(
        RecordingCamera::default(),
        &clock,
        resolved.window,
        tmp.path(),
        stats.clone(),
    );
    assert_eq!(capture.state(), WindowState::WaitingToStart);

    let mut events = Vec::new();
    capture.run_with(|event| events.push(event.clone())).unwrap();

    // Polls at +0, +2, +4, +6, +8 while waiting.
    let waits: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            LoopEvent::Waiting { remaining } => Some(remaining.num_seconds()),
            _ => None,
        })
        .collect();
    assert_eq!(waits, vec![10, 8, 6, 4, 2]);

    // Captures at +10 through +15 inclusive, then done at +16.
    let saved: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            LoopEvent::Saved(path) => Some(path.file_name().unwrap().to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    assert_eq!(
        saved,
        vec![
            "2024-01-02_12-00-10.jpg",
            "2024-01-02_12-00-11.jpg",
            "2024-01-02_12-00-12.jpg",
            "2024-01-02_12-00-13.jpg",
            "2024-01-02_12-00-14.jpg",
            "2024-01-02_12-00-15.jpg",
        ]
    );
    assert_eq!(events.last(), Some(&LoopEvent::Done));
    assert_eq!(capture.state(), WindowState::Done);
    assert_eq!(clock.now(), at(12, 0, 16));

    for name in &saved {
        assert!(tmp.path().join(name).is_file());
    }

    let camera = capture.camera();
    assert_eq!(camera.annotations.len(), 6);
    assert_eq!(camera.annotations[0], "Tuesday January 02 2024 12:00:10 PM");

    let snapshot = stats.stats();
    assert_eq!(snapshot.captured, 6);
    assert_eq!(snapshot.failed, 0);
    assert_eq!(snapshot.waits, 5);
}

#[test]
fn test_interval_spacing_in_minutes() {
    let tmp = tempfile::tempdir().unwrap();
    let now = at(9, 0, 0);
    let clock = SimulatedClock::new(now);
    let config = CaptureConfig {
        outdir: tmp.path().to_path_buf(),
        start: None,
        duration: 10.0,
        interval: 5.0,
        unit: TimeUnit::Minutes,
    };
    let resolved = resolve(&config, clock.now()).unwrap();

    let mut capture = CaptureLoop::new(
        RecordingCamera::default(),
        &clock,
        resolved.window,
        tmp.path(),
        create_shared_stats(),
    );
    capture.run_with(|_| {}).unwrap();

    let names: Vec<_> = capture
        .camera()
        .captures
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "2024-01-02_09-00-00.jpg",
            "2024-01-02_09-05-00.jpg",
            "2024-01-02_09-10-00.jpg",
        ]
    );
    assert!(clock
        .sleeps()
        .iter()
        .all(|d| *d == std::time::Duration::from_secs(300)));
}

#[test]
fn test_missing_file_is_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = SimulatedClock::new(at(12, 0, 0));
    let config = seconds_config(None, 2.0, tmp.path());
    let resolved = resolve(&config, clock.now()).unwrap();
    let stats = create_shared_stats();

    let camera = RecordingCamera {
        drop_frames: true,
        ..RecordingCamera::default()
    };
    let mut capture = CaptureLoop::new(camera, &clock, resolved.window, tmp.path(), stats.clone());

    let mut events = Vec::new();
    capture.run_with(|event| events.push(event.to_string())).unwrap();

    assert_eq!(events.len(), 4);
    assert!(events[..3]
        .iter()
        .all(|line| line.starts_with("Failed to save image: ")));
    assert_eq!(events[3], "Done!");
    assert_eq!(stats.stats().failed, 3);
    assert_eq!(stats.stats().captured, 0);
}

#[test]
fn test_camera_error_stops_loop() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = SimulatedClock::new(at(12, 0, 0));
    let resolved = resolve(&seconds_config(None, 0.0, tmp.path()), clock.now()).unwrap();

    let camera = RecordingCamera {
        fail_after: Some(2),
        ..RecordingCamera::default()
    };
    let mut capture = CaptureLoop::new(
        camera,
        &clock,
        resolved.window,
        tmp.path(),
        create_shared_stats(),
    );

    let err = capture.run_with(|_| {}).unwrap_err();
    assert!(matches!(err, CameraError::Encode(_)));
    assert_eq!(capture.camera().captures.len(), 2);
}

#[test]
fn test_unbounded_never_finishes_on_its_own() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = SimulatedClock::new(at(23, 59, 58));
    let resolved = resolve(&seconds_config(None, 0.0, tmp.path()), clock.now()).unwrap();

    let mut capture = CaptureLoop::new(
        RecordingCamera::default(),
        &clock,
        resolved.window,
        tmp.path(),
        create_shared_stats(),
    );

    // Crosses midnight and keeps going.
    for _ in 0..100 {
        let event = capture.poll().unwrap();
        assert!(matches!(event, LoopEvent::Saved(_)));
        capture.pause_after(&event);
    }
    assert_eq!(capture.state(), WindowState::Capturing);
    assert_eq!(
        capture.camera().captures[2].file_name().unwrap(),
        "2024-01-03_00-00-00.jpg"
    );
}

#[test]
fn test_past_start_captures_immediately() {
    let tmp = tempfile::tempdir().unwrap();
    let now = at(12, 0, 0);
    let clock = SimulatedClock::new(now);
    let config = seconds_config(Some(at(11, 0, 0)), 1.0, tmp.path());
    let resolved = resolve(&config, clock.now()).unwrap();
    assert!(resolved.start_clamped);

    let mut capture = CaptureLoop::new(
        RecordingCamera::default(),
        &clock,
        resolved.window,
        tmp.path(),
        create_shared_stats(),
    );
    capture.start_camera().unwrap();
    assert_eq!(capture.camera().previews, 1);

    // The two second warm-up already put the clock past the one second window.
    assert_eq!(capture.poll().unwrap(), LoopEvent::Done);
    assert!(capture.camera().captures.is_empty());
}
