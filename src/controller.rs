//! Orchestration around the pure geometry: detector, configuration,
//! completion callback, and staleness tracking.

use std::sync::atomic::{AtomicU64, Ordering};

use image::{DynamicImage, RgbaImage};
use log::{debug, trace};

use crate::detector::FaceDetector;
use crate::error::FocusError;
use crate::geometry::Size;
use crate::mapper::{map_to_viewport, MappingResult};
use crate::overlay::render_overlay;
use crate::roi::{aggregate, RegionOfInterest};
use crate::FocusOptions;

type FocusCallback = Box<dyn Fn(&MappingResult) + Send + Sync>;

/// Result of a successful focus pass.
#[derive(Debug, Clone)]
pub struct FocusOutcome {
    /// Aggregated face region in top-left image coordinates.
    pub roi: RegionOfInterest,
    /// Geometry for the presentation boundary to apply.
    pub mapping: MappingResult,
    /// Debug rendering of the raw detections, when enabled.
    pub overlay: Option<RgbaImage>,
    /// Which focus pass produced this outcome; see
    /// [`FocusController::is_current`].
    pub generation: u64,
}

/// Owns the detector, framing configuration, and completion callback.
///
/// This replaces per-view associated storage: everything that used to hang
/// off a live UI object lives here as a plain field. The controller itself
/// holds no image state and no locks — the geometry is pure, so `focus` may
/// run on any thread. Applying a [`MappingResult`] to a visible surface is
/// the caller's job and belongs on whichever thread owns that surface.
pub struct FocusController {
    detector: Box<dyn FaceDetector>,
    options: FocusOptions,
    on_focused: Option<FocusCallback>,
    generation: AtomicU64,
}

impl FocusController {
    /// Create a controller with default options.
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Self::with_options(detector, FocusOptions::default())
    }

    /// Create a controller with explicit options.
    pub fn with_options(detector: Box<dyn FaceDetector>, options: FocusOptions) -> Self {
        Self {
            detector,
            options,
            on_focused: None,
            generation: AtomicU64::new(0),
        }
    }

    /// Register a completion callback, fired exactly once per successful
    /// mapping. It never fires when detection finds zero faces.
    pub fn on_focused(
        mut self,
        callback: impl Fn(&MappingResult) + Send + Sync + 'static,
    ) -> Self {
        self.on_focused = Some(Box::new(callback));
        self
    }

    /// The active framing configuration.
    pub fn options(&self) -> &FocusOptions {
        &self.options
    }

    /// Generation of the most recent [`focus`](Self::focus) call.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether an outcome from `generation` is still the latest. When a newer
    /// image is set while a detection pass is in flight, presentation glue
    /// checks this and drops the superseded outcome — last writer wins.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }

    /// Run one detect → aggregate → map pass over `image`.
    ///
    /// Zero faces is a normal outcome, not an error: `Ok(None)` is returned,
    /// the callback does not fire, and the caller keeps showing the original
    /// image unmodified.
    ///
    /// # Errors
    ///
    /// [`FocusError::DegenerateSize`] for a bad viewport,
    /// [`FocusError::InvalidDetection`] when the detector hands back a
    /// malformed box.
    pub fn focus(
        &self,
        image: &DynamicImage,
        viewport: Size,
    ) -> Result<Option<FocusOutcome>, FocusError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let detections = self.detector.detect(image);
        if detections.is_empty() {
            debug!("no faces found");
            return Ok(None);
        }
        debug!("found {} face(s)", detections.len());

        let image_size = Size::new(f64::from(image.width()), f64::from(image.height()));
        let roi = aggregate(&detections, image_size)?;
        let mapping = map_to_viewport(&roi, image_size, viewport, &self.options)?;
        trace!(
            "roi=({:.1}, {:.1}, {:.1}x{:.1}) frame=({:.1}, {:.1}, {:.1}x{:.1})",
            roi.rect.x,
            roi.rect.y,
            roi.rect.width,
            roi.rect.height,
            mapping.display_frame.x,
            mapping.display_frame.y,
            mapping.display_frame.width,
            mapping.display_frame.height,
        );

        let overlay = self.options.debug_overlay.then(|| {
            render_overlay(
                image,
                &detections,
                self.options.stroke_color,
                self.options.stroke_width,
            )
        });

        if let Some(callback) = &self.on_focused {
            callback(&mapping);
        }

        Ok(Some(FocusOutcome {
            roi,
            mapping,
            overlay,
            generation,
        }))
    }
}
