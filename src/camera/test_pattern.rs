//! Synthetic camera for running without hardware.
//!
//! Renders a colour gradient that shifts with every frame and marks annotated
//! frames with a dark banner along the top edge.

use super::{Camera, CameraError};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Height of the annotation banner in pixels.
const BANNER_HEIGHT: u32 = 16;

/// A camera that writes generated JPEG frames.
#[derive(Debug, Clone)]
pub struct TestPatternCamera {
    width: u32,
    height: u32,
    annotation: Option<String>,
    frames: u64,
}

impl TestPatternCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            annotation: None,
            frames: 0,
        }
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    fn render(&self) -> RgbImage {
        let (w, h) = (self.width, self.height);
        let shift = (self.frames % 256) as u8;
        let banner = self.annotation.is_some();

        RgbImage::from_fn(w, h, |x, y| {
            if banner && y < BANNER_HEIGHT.min(h) {
                return Rgb([16, 16, 16]);
            }
            let r = (x * 255 / w) as u8;
            let g = (y * 255 / h) as u8;
            Rgb([r.wrapping_add(shift), g, 255 - shift])
        })
    }
}

impl Default for TestPatternCamera {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Camera for TestPatternCamera {
    fn start_preview(&mut self) -> Result<(), CameraError> {
        tracing::debug!(width = self.width, height = self.height, "test pattern preview");
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
        self.render()
            .save_with_format(path, ImageFormat::Jpeg)
            .map_err(|e| CameraError::Encode(e.to_string()))?;
        self.frames += 1;
        tracing::debug!(path = %path.display(), annotation = ?self.annotation, "test pattern frame written");
        Ok(())
    }
}
