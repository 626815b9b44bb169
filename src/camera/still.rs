//! Camera backend that shells out to a still-capture program.
//!
//! Each capture runs the program once, in the style of `raspistill`:
//! `-n` disables the preview window, `-t` is the delay before the shot in
//! milliseconds, `-a` sets the annotation text and `-o` the output file.

use super::{Camera, CameraError};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Program used when `--still-command` is not given.
pub const DEFAULT_STILL_COMMAND: &str = "raspistill";

/// Delay before the shutter fires, in milliseconds.
const SHUTTER_DELAY_MS: u32 = 1;

/// A camera driven by an external still-capture program.
#[derive(Debug, Clone)]
pub struct StillCommandCamera {
    program: String,
    preview: bool,
    annotation: Option<String>,
}

impl StillCommandCamera {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            preview: false,
            annotation: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one capture to `path`.
    pub fn args(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if !self.preview {
            args.push("-n".into());
        }
        args.push("-t".into());
        args.push(SHUTTER_DELAY_MS.to_string().into());
        if let Some(ref text) = self.annotation {
            args.push("-a".into());
            args.push(text.into());
        }
        args.push("-o".into());
        args.push(path.as_os_str().to_os_string());
        args
    }
}

impl Default for StillCommandCamera {
    fn default() -> Self {
        Self::new(DEFAULT_STILL_COMMAND)
    }
}

impl Camera for StillCommandCamera {
    fn start_preview(&mut self) -> Result<(), CameraError> {
        self.preview = true;
        tracing::debug!(program = %self.program, "preview enabled");
        Ok(())
    }

    fn set_annotate_text(&mut self, text: &str) {
        self.annotation = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
    }

    fn capture(&mut self, path: &Path) -> Result<(), CameraError> {
        let args = self.args(path);
        tracing::debug!(program = %self.program, ?args, "running still capture");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| CameraError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(CameraError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
