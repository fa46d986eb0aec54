//! Face-aware framing: reduce detected face boxes to a region of interest
//! and map it onto a display viewport, so forced-aspect presentation keeps
//! faces in view instead of centering blindly.
//!
//! The geometry engine ([`aggregate`] and [`map_to_viewport`]) is pure,
//! synchronous, and thread-agnostic. Face detection is a black-box
//! collaborator behind the [`FaceDetector`] trait; [`FocusController`] wires
//! the two together with a completion callback and a generation counter for
//! discarding superseded results.
//!
//! # Example
//!
//! ```
//! use faceframe::{aggregate, map_to_viewport, FaceDetection, FocusOptions, Size};
//!
//! // One face reported by the detector, in bottom-left-origin coordinates.
//! let detections = vec![FaceDetection::new(900.0, 400.0, 200.0, 200.0)];
//! let image = Size::new(2000.0, 1000.0);
//!
//! let roi = aggregate(&detections, image)?;
//! let mapping = map_to_viewport(&roi, image, Size::new(500.0, 500.0), &FocusOptions::default())?;
//!
//! // The 2:1 image fills the square viewport at half scale, slid left so the
//! // face cluster stays visible.
//! assert_eq!(mapping.scaled_image_size.width, 1000.0);
//! assert_eq!(mapping.display_offset.x, -250.0);
//! # Ok::<(), faceframe::FocusError>(())
//! ```
#![warn(missing_docs)]

mod controller;
pub mod detector;
mod error;
mod geometry;
mod mapper;
mod overlay;
mod roi;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based face detector backend.
pub mod rustface_backend;

pub use controller::{FocusController, FocusOutcome};
pub use detector::{FaceDetection, FaceDetector};
pub use error::FocusError;
pub use geometry::{Point, Rect, Size};
pub use mapper::{map_to_viewport, FramingPolicy, MappingResult};
pub use overlay::render_overlay;
pub use roi::{aggregate, RegionOfInterest};
#[cfg(feature = "rustface")]
pub use rustface_backend::RustfaceDetector;

use image::Rgba;

/// Vertical anchor for the tall-image aspect-fill branch: the region of
/// interest lands at the golden-ratio point below the top edge instead of
/// dead center, keeping faces in the upper-middle of the viewport.
/// Inherited tuning, not a geometric necessity.
pub const DEFAULT_VERTICAL_ANCHOR: f64 = 1.0 - 0.618;

/// Context-expansion growth: the crop window is this many times the tight
/// face box on each axis, capped at the image bounds.
pub const DEFAULT_EXPANSION_FACTOR: f64 = 2.0;

/// Default debug stroke width, in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 3;

/// Default debug stroke color (opaque red).
pub const DEFAULT_STROKE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Framing configuration.
///
/// Built with chained setters and passed to [`map_to_viewport`] or owned by a
/// [`FocusController`]:
///
/// ```
/// use faceframe::{FocusOptions, FramingPolicy};
///
/// let options = FocusOptions::new()
///     .policy(FramingPolicy::ContextExpansion)
///     .expansion_factor(2.5)
///     .debug_overlay(true);
/// ```
#[derive(Debug, Clone)]
pub struct FocusOptions {
    /// Selected framing policy.
    pub policy: FramingPolicy,
    /// Crop-window growth for [`FramingPolicy::ContextExpansion`]. Must be
    /// finite and ≥ 1. Default [`DEFAULT_EXPANSION_FACTOR`].
    pub expansion_factor: f64,
    /// Vertical anchor for the tall-image aspect-fill branch; 0.0 pins the
    /// region of interest to the top edge, 0.5 centers it. Default
    /// [`DEFAULT_VERTICAL_ANCHOR`].
    pub vertical_anchor: f64,
    /// Render the raw detections as stroked outlines alongside the mapping.
    pub debug_overlay: bool,
    /// Stroke color for the debug overlay.
    pub stroke_color: Rgba<u8>,
    /// Stroke width for the debug overlay, in pixels.
    pub stroke_width: u32,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            policy: FramingPolicy::default(),
            expansion_factor: DEFAULT_EXPANSION_FACTOR,
            vertical_anchor: DEFAULT_VERTICAL_ANCHOR,
            debug_overlay: false,
            stroke_color: DEFAULT_STROKE_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl FocusOptions {
    /// Default configuration: aspect fill, golden-ratio anchor, no overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the framing policy.
    pub fn policy(mut self, policy: FramingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the context-expansion growth factor.
    pub fn expansion_factor(mut self, factor: f64) -> Self {
        self.expansion_factor = factor;
        self
    }

    /// Set the vertical anchor for tall-image aspect fill.
    pub fn vertical_anchor(mut self, anchor: f64) -> Self {
        self.vertical_anchor = anchor;
        self
    }

    /// Enable or disable the debug overlay.
    pub fn debug_overlay(mut self, enable: bool) -> Self {
        self.debug_overlay = enable;
        self
    }

    /// Set the debug stroke color.
    pub fn stroke_color(mut self, color: Rgba<u8>) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the debug stroke width in pixels.
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }
}
