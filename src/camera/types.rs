//! Shared camera types.

use clap::ValueEnum;

/// Which camera backend drives the capture loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CameraKind {
    /// Run a still-capture program once per frame
    #[default]
    Still,
    /// Render a synthetic frame, no hardware needed
    TestPattern,
}

/// Errors raised by a camera backend.
///
/// A capture that returns `Ok` but leaves no file behind is not an error here;
/// the capture loop checks for the file and reports it separately.
#[derive(Debug)]
pub enum CameraError {
    /// The capture program could not be started
    Spawn { program: String, reason: String },
    /// The capture program ran but exited unsuccessfully
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },
    /// A frame could not be encoded or written
    Encode(String),
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraError::Spawn { program, reason } => {
                write!(f, "Could not run '{program}': {reason}")
            }
            CameraError::CommandFailed {
                program,
                status,
                stderr,
            } => {
                write!(f, "'{program}' failed ({status})")?;
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            CameraError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for CameraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_kind_parsing() {
        assert_eq!(CameraKind::from_str("still", true).unwrap(), CameraKind::Still);
        assert_eq!(
            CameraKind::from_str("test-pattern", true).unwrap(),
            CameraKind::TestPattern
        );
        assert_eq!(CameraKind::default(), CameraKind::Still);
    }

    #[test]
    fn test_command_failed_display() {
        let err = CameraError::CommandFailed {
            program: "raspistill".to_string(),
            status: "exit status: 70".to_string(),
            stderr: "mmal: No data received from sensor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'raspistill' failed (exit status: 70): mmal: No data received from sensor"
        );

        let quiet = CameraError::CommandFailed {
            program: "raspistill".to_string(),
            status: "exit status: 1".to_string(),
            stderr: String::new(),
        };
        assert_eq!(quiet.to_string(), "'raspistill' failed (exit status: 1)");
    }
}
