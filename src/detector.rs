//! Face detection data types and the pluggable detector trait.

use image::DynamicImage;

use crate::geometry::Rect;

/// A single detected face, in image pixel coordinates.
///
/// The detector convention is bottom-left origin with y growing upward, as
/// emitted by Core Image and several DNN post-processors. The aggregator
/// flips boxes into top-left-origin space before any geometry runs on them.
///
/// Detections carry no identity beyond their geometry and are not tracked
/// across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDetection {
    /// Left edge (pixels).
    pub x: f64,
    /// Bottom edge, in bottom-left-origin coordinates (pixels).
    pub y: f64,
    /// Width of the bounding box (pixels).
    pub width: f64,
    /// Height of the bounding box (pixels).
    pub height: f64,
    /// Detector confidence score; informational only.
    pub confidence: f64,
}

impl FaceDetection {
    /// Create a detection with a neutral confidence of 1.0.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            confidence: 1.0,
        }
    }

    /// Attach a confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// The bounding box as a plain rectangle (still bottom-left origin).
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Pluggable face detection backend.
///
/// Implement this to feed any detection engine (Core Image, ONNX, dlib, ...)
/// into [`crate::FocusController`]. Detection may be CPU-intensive; callers
/// are expected to run it off their interactive thread.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in `image`, returning bottom-left-origin boxes.
    /// An empty result is a legitimate "no faces" outcome, not an error.
    fn detect(&self, image: &DynamicImage) -> Vec<FaceDetection>;
}
