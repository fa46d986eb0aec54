use std::path::Path;

use image::DynamicImage;

use crate::detector::{FaceDetection, FaceDetector};
use crate::error::FocusError;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// SeetaFace reports top-left-origin boxes; this backend converts them into
/// the bottom-left convention [`FaceDetector`] promises, so the aggregator's
/// flip applies uniformly regardless of backend.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace model (e.g. `seeta_fd_frontal_v1.0.bin`) from disk.
    pub fn from_model_path(path: impl AsRef<Path>) -> Result<Self, FocusError> {
        let data =
            std::fs::read(path.as_ref()).map_err(|e| FocusError::ModelLoad(e.to_string()))?;
        let model = rustface::read_model(std::io::Cursor::new(data))
            .map_err(|e| FocusError::ModelLoad(e.to_string()))?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, image: &DynamicImage) -> Vec<FaceDetection> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                let h = f64::from(bbox.height());
                FaceDetection::new(
                    f64::from(bbox.x()),
                    f64::from(height) - f64::from(bbox.y()) - h,
                    f64::from(bbox.width()),
                    h,
                )
                .with_confidence(face.score())
            })
            .collect()
    }
}
