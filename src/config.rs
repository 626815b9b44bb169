//! Configuration for a time-lapse run.
//!
//! Everything comes from the command line; there is no config file.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Format accepted by `--start`.
pub const START_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Unit shared by `--duration` and `--interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeUnit {
    Hours,
    Minutes,
    #[default]
    Seconds,
}

impl TimeUnit {
    /// Number of seconds in one unit.
    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Hours => 3600.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Seconds => 1.0,
        }
    }

    /// Convert a value in this unit to seconds.
    pub fn to_seconds(self, value: f64) -> f64 {
        value * self.seconds()
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a `--start` value in `YYYY-MM-DD-HH-MM-SS` form.
///
/// The error string is what clap shows next to the offending argument.
pub fn parse_start_time(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, START_FORMAT).map_err(|_| format!("Not a valid date: '{s}'."))
}

/// Parsed capture settings, before the window is resolved against the clock.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Directory images are written to
    pub outdir: PathBuf,
    /// Requested start; `None` means start immediately
    pub start: Option<NaiveDateTime>,
    /// Window length in `unit`; zero or less runs forever
    pub duration: f64,
    /// Capture spacing in `unit`
    pub interval: f64,
    pub unit: TimeUnit,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("."),
            start: None,
            duration: 0.0,
            interval: 1.0,
            unit: TimeUnit::Seconds,
        }
    }
}

impl CaptureConfig {
    /// Interval with non-positive values replaced by one unit.
    pub fn effective_interval(&self) -> f64 {
        if self.interval > 0.0 {
            self.interval
        } else {
            1.0
        }
    }

    /// Whether the run has an end time.
    pub fn is_bounded(&self) -> bool {
        self.duration > 0.0
    }

    /// Create the output directory, including parents.
    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        if !self.outdir.is_dir() {
            std::fs::create_dir_all(&self.outdir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        Ok(())
    }

    /// Absolute form of the output directory for display.
    pub fn display_outdir(&self) -> PathBuf {
        absolute(&self.outdir)
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    /// Duration or interval too large to turn into a timestamp
    OutOfRange(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::OutOfRange(e) => write!(f, "Out of range: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
