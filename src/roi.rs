use crate::detector::FaceDetection;
use crate::error::FocusError;
use crate::geometry::{Point, Rect, Size};

/// The union of all detected faces, in top-left-origin image coordinates.
///
/// Always fully contained within `[0, image_w] × [0, image_h]`. A derived
/// value, recomputed per detection pass and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionOfInterest {
    /// Bounding rectangle covering every detection.
    pub rect: Rect,
}

impl RegionOfInterest {
    /// Center of the region.
    pub fn center(&self) -> Point {
        self.rect.center()
    }
}

/// Reduce a set of detections to a single region of interest.
///
/// Each detection is flipped from the detector's bottom-left origin into
/// top-left-origin space (`y' = image_h - y - h`); the result is the minimal
/// box covering all of them, intersected with the image bounds. Box union is
/// commutative and associative, so input order never matters.
///
/// No padding is applied here — context expansion is the mapper's concern.
///
/// # Errors
///
/// [`FocusError::EmptyDetections`] when `detections` is empty (callers fall
/// back to the full image), [`FocusError::DegenerateSize`] for a bad image
/// size, and [`FocusError::InvalidDetection`] for a malformed box.
pub fn aggregate(
    detections: &[FaceDetection],
    image_size: Size,
) -> Result<RegionOfInterest, FocusError> {
    image_size.ensure_valid("image size")?;

    let mut acc: Option<Rect> = None;
    for (index, detection) in detections.iter().enumerate() {
        let rect = detection.rect();
        if !rect.is_valid() {
            return Err(FocusError::InvalidDetection { index });
        }
        let flipped = rect.flip_y(image_size.height);
        acc = Some(match acc {
            Some(union) => union.union(&flipped),
            None => flipped,
        });
    }
    let Some(union) = acc else {
        return Err(FocusError::EmptyDetections);
    };

    // Detectors occasionally report boxes that poke past the frame edge;
    // intersecting keeps the containment guarantee.
    let bounds = Rect::new(0.0, 0.0, image_size.width, image_size.height);
    Ok(RegionOfInterest {
        rect: union.intersect(&bounds),
    })
}
