//! Walk the focus pipeline over a synthetic image and print the resulting
//! framing for both policies.
//!
//! Usage:
//!   cargo run --example focus_preview

use image::{DynamicImage, Rgba, RgbaImage};

use faceframe::{
    FaceDetection, FaceDetector, FocusController, FocusOptions, FramingPolicy, Size,
};

/// Canned detector standing in for a real backend.
struct FixedDetector(Vec<FaceDetection>);

impl FaceDetector for FixedDetector {
    fn detect(&self, _image: &DynamicImage) -> Vec<FaceDetection> {
        self.0.clone()
    }
}

fn main() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        1600,
        900,
        Rgba([40, 40, 48, 255]),
    ));
    let viewport = Size::new(400.0, 400.0);

    // Two faces near the right edge, in bottom-left detector coordinates.
    let detections = vec![
        FaceDetection::new(1100.0, 420.0, 180.0, 180.0),
        FaceDetection::new(1340.0, 380.0, 160.0, 160.0),
    ];

    for policy in [FramingPolicy::AspectFill, FramingPolicy::ContextExpansion] {
        let controller = FocusController::with_options(
            Box::new(FixedDetector(detections.clone())),
            FocusOptions::new().policy(policy).debug_overlay(true),
        )
        .on_focused(|mapping| {
            println!(
                "  frame  = ({:.1}, {:.1}, {:.1}x{:.1})",
                mapping.display_frame.x,
                mapping.display_frame.y,
                mapping.display_frame.width,
                mapping.display_frame.height
            );
        });

        println!("=== {policy:?} ===");
        match controller.focus(&image, viewport) {
            Ok(Some(outcome)) => {
                println!(
                    "  roi    = ({:.1}, {:.1}, {:.1}x{:.1})",
                    outcome.roi.rect.x,
                    outcome.roi.rect.y,
                    outcome.roi.rect.width,
                    outcome.roi.rect.height
                );
                println!(
                    "  scaled = {:.1}x{:.1}, offset = ({:.1}, {:.1})",
                    outcome.mapping.scaled_image_size.width,
                    outcome.mapping.scaled_image_size.height,
                    outcome.mapping.display_offset.x,
                    outcome.mapping.display_offset.y
                );
                if let Some(overlay) = outcome.overlay {
                    println!(
                        "  overlay rendered at {}x{}",
                        overlay.width(),
                        overlay.height()
                    );
                }
            }
            Ok(None) => println!("  no faces found, presenting the original image"),
            Err(e) => println!("  error: {e}"),
        }
        println!();
    }
}
