//! Camera backends for the capture loop.
//!
//! The loop only needs three things from a camera: start its preview once,
//! accept annotation text, and write a JPEG to a path on request.

pub mod still;
pub mod test_pattern;
pub mod types;

use std::path::Path;

pub use still::{StillCommandCamera, DEFAULT_STILL_COMMAND};
pub use test_pattern::TestPatternCamera;
pub use types::{CameraError, CameraKind};

/// A camera the capture loop can drive.
pub trait Camera {
    /// Start the preview. Called once before the first capture.
    fn start_preview(&mut self) -> Result<(), CameraError>;

    /// Set the text overlaid on subsequent captures.
    fn set_annotate_text(&mut self, text: &str);

    /// Capture a single JPEG frame to `path`.
    fn capture(&mut self, path: &Path) -> Result<(), CameraError>;
}

impl<C: Camera + ?Sized> Camera for Box<C> {
    fn start_preview(&mut self) -> Result<(), CameraError> {
        (**self).start_preview()
    }

    fn set_annotate_text(&mut self, text: &str) {
        (**self).set_annotate_text(text)
    }

    fn capture(&mut self, path: &Path) -> Result<(), CameraError> {
        (**self).capture(path)
    }
}

/// Build the backend selected on the command line.
pub fn open(kind: CameraKind, still_command: &str) -> Box<dyn Camera> {
    match kind {
        CameraKind::Still => Box::new(StillCommandCamera::new(still_command)),
        CameraKind::TestPattern => Box::new(TestPatternCamera::default()),
    }
}
