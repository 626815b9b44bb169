//! Timestamp formatting for file names, annotations and status lines.

use chrono::{Duration, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Image file name pattern, one file per second at most.
pub const FILENAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S.jpg";

/// Text burned into each frame, e.g. `Tuesday January 02 2024 03:04:05 AM`.
pub const ANNOTATION_FORMAT: &str = "%A %B %d %Y %I:%M:%S %p";

/// Format for dates in the run summary.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name for a frame captured at `timestamp`.
pub fn image_filename(timestamp: NaiveDateTime) -> String {
    timestamp.format(FILENAME_FORMAT).to_string()
}

/// Full output path for a frame captured at `timestamp`.
pub fn image_path(outdir: &Path, timestamp: NaiveDateTime) -> PathBuf {
    outdir.join(image_filename(timestamp))
}

pub fn annotation_text(timestamp: NaiveDateTime) -> String {
    timestamp.format(ANNOTATION_FORMAT).to_string()
}

pub fn display_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}

/// Render a wait as `H:MM:SS`. Negative values render as zero.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
