//! Capture window resolution.
//!
//! Turns the parsed CLI values into absolute start/end timestamps and an
//! interval in seconds. A start in the past is clamped to the clock reading
//! taken at resolution time.

use crate::config::{CaptureConfig, ConfigError};
use crate::core::naming::display_timestamp;
use chrono::{Duration, NaiveDateTime};
use std::time::Duration as StdDuration;

/// State of the capture loop relative to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Before the window start
    WaitingToStart,
    /// Inside the window
    Capturing,
    /// Past the end of a bounded window
    Done,
}

/// A resolved capture window in absolute local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    /// `None` runs forever
    pub end: Option<NaiveDateTime>,
    /// Spacing between captures, always positive
    pub interval: StdDuration,
}

impl TimeWindow {
    pub fn is_bounded(&self) -> bool {
        self.end.is_some()
    }

    pub fn interval_seconds(&self) -> f64 {
        self.interval.as_secs_f64()
    }

    /// Strictly after the end of a bounded window.
    pub fn has_ended(&self, now: NaiveDateTime) -> bool {
        matches!(self.end, Some(end) if now > end)
    }

    /// At or after the window start.
    pub fn has_started(&self, now: NaiveDateTime) -> bool {
        now >= self.start
    }

    /// Classify a clock reading. The end check wins over the start check.
    pub fn state_at(&self, now: NaiveDateTime) -> WindowState {
        if self.has_ended(now) {
            WindowState::Done
        } else if self.has_started(now) {
            WindowState::Capturing
        } else {
            WindowState::WaitingToStart
        }
    }

    /// Time left before the window opens, zero once it has.
    pub fn time_until_start(&self, now: NaiveDateTime) -> Duration {
        if now >= self.start {
            Duration::zero()
        } else {
            self.start - now
        }
    }
}

/// Result of resolving a [`CaptureConfig`] against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub window: TimeWindow,
    /// The requested start was in the past and was moved to `now`
    pub start_clamped: bool,
}

/// Resolve the capture window for `config` given the current time.
pub fn resolve(config: &CaptureConfig, now: NaiveDateTime) -> Result<ResolvedWindow, ConfigError> {
    let requested = config.start.unwrap_or(now);
    let start_clamped = requested < now;
    let start = if start_clamped { now } else { requested };

    let end = if config.is_bounded() {
        let length = seconds_to_duration(config.unit.to_seconds(config.duration))?;
        let end = start.checked_add_signed(length).ok_or_else(|| {
            ConfigError::OutOfRange(format!(
                "duration {} {} ends past the supported calendar",
                config.duration, config.unit
            ))
        })?;
        Some(end)
    } else {
        None
    };

    let interval_secs = config.unit.to_seconds(config.effective_interval());
    let interval = StdDuration::try_from_secs_f64(interval_secs).map_err(|e| {
        ConfigError::OutOfRange(format!(
            "interval {} {}: {e}",
            config.effective_interval(),
            config.unit
        ))
    })?;

    Ok(ResolvedWindow {
        window: TimeWindow {
            start,
            end,
            interval,
        },
        start_clamped,
    })
}

/// Run summary printed before capturing starts.
pub fn summary(config: &CaptureConfig, window: &TimeWindow) -> String {
    let end = match window.end {
        Some(end) => display_timestamp(end),
        None => "never".to_string(),
    };
    let duration = if config.is_bounded() {
        format!("{:.2} {}", config.duration, config.unit)
    } else {
        "forever".to_string()
    };
    format!(
        "Time lapse summary:\n\
         Start date/time: {}\n\
         End date/time: {}\n\
         Time lapse duration: {}\n\
         Time lapse interval: {:.2} {}\n\
         Image save directory: {}",
        display_timestamp(window.start),
        end,
        duration,
        config.effective_interval(),
        config.unit,
        config.display_outdir().display()
    )
}

/// Convert fractional seconds to a chrono duration at microsecond resolution.
fn seconds_to_duration(seconds: f64) -> Result<Duration, ConfigError> {
    let micros = (seconds * 1_000_000.0).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(ConfigError::OutOfRange(format!(
            "{seconds} seconds is too long"
        )));
    }
    Ok(Duration::microseconds(micros as i64))
}
