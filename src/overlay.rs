//! Debug rendering of raw detections as stroked outlines.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::detector::FaceDetection;

/// Draw each detection as a stroked outline on an RGBA copy of `image`.
///
/// Boxes are flipped from the detector's bottom-left origin into the image's
/// top-left drawing space. The input image is never touched; the caller keeps
/// the original buffer and receives a fresh one. Boxes partially outside the
/// frame are clipped, fully off-frame boxes are skipped.
pub fn render_overlay(
    image: &DynamicImage,
    detections: &[FaceDetection],
    stroke: Rgba<u8>,
    stroke_width: u32,
) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return canvas;
    }

    for detection in detections {
        let rect = detection.rect().flip_y(height as f64);
        if rect.max_x() <= 0.0
            || rect.max_y() <= 0.0
            || rect.x >= width as f64
            || rect.y >= height as f64
        {
            continue;
        }
        let x0 = clamp_px(rect.x, width);
        let y0 = clamp_px(rect.y, height);
        let x1 = clamp_px(rect.max_x(), width);
        let y1 = clamp_px(rect.max_y(), height);
        stroke_rect(&mut canvas, x0, y0, x1, y1, stroke, stroke_width);
    }

    canvas
}

fn clamp_px(value: f64, limit: u32) -> u32 {
    value.round().clamp(0.0, limit.saturating_sub(1) as f64) as u32
}

/// Stroke the outline of the pixel box `(x0, y0)..=(x1, y1)`, growing the
/// stroke inward so it never spills past the box.
fn stroke_rect(
    canvas: &mut RgbaImage,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: Rgba<u8>,
    thickness: u32,
) {
    for t in 0..thickness {
        let left = x0.saturating_add(t);
        let top = y0.saturating_add(t);
        let right = x1.saturating_sub(t);
        let bottom = y1.saturating_sub(t);
        if left > right || top > bottom {
            break;
        }
        for x in left..=right {
            canvas.put_pixel(x, top, color);
            canvas.put_pixel(x, bottom, color);
        }
        for y in top..=bottom {
            canvas.put_pixel(left, y, color);
            canvas.put_pixel(right, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STROKE: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BACKGROUND: Rgba<u8> = Rgba([10, 20, 30, 255]);

    fn test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, BACKGROUND))
    }

    fn count_stroke_pixels(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| **p == STROKE).count()
    }

    #[test]
    fn input_image_is_never_mutated() {
        let image = test_image(100, 100);
        let before = image.as_bytes().to_vec();
        let _ = render_overlay(
            &image,
            &[FaceDetection::new(10.0, 20.0, 30.0, 40.0)],
            STROKE,
            3,
        );
        assert_eq!(image.as_bytes(), &before[..]);
    }

    #[test]
    fn outline_lands_on_flipped_coordinates() {
        // Bottom-left box (10, 20, 30, 40) in a 100px-tall image becomes the
        // top-left box with y0 = 100 - 20 - 40 = 40.
        let canvas = render_overlay(
            &test_image(100, 100),
            &[FaceDetection::new(10.0, 20.0, 30.0, 40.0)],
            STROKE,
            1,
        );

        assert_eq!(*canvas.get_pixel(10, 40), STROKE); // top-left corner
        assert_eq!(*canvas.get_pixel(40, 80), STROKE); // bottom-right corner
        assert_eq!(*canvas.get_pixel(25, 40), STROKE); // top edge
        assert_eq!(*canvas.get_pixel(25, 60), BACKGROUND); // interior untouched
        assert_eq!(*canvas.get_pixel(5, 5), BACKGROUND); // outside untouched
    }

    #[test]
    fn single_box_strokes_exactly_its_perimeter() {
        let canvas = render_overlay(
            &test_image(100, 100),
            &[FaceDetection::new(10.0, 20.0, 30.0, 40.0)],
            STROKE,
            1,
        );
        // Box spans x 10..=40 (31px) and y 40..=80 (41px):
        // two rows + two columns minus the four shared corners.
        assert_eq!(count_stroke_pixels(&canvas), 31 + 31 + 41 + 41 - 4);
    }

    #[test]
    fn one_outline_per_detection() {
        let canvas = render_overlay(
            &test_image(200, 200),
            &[
                FaceDetection::new(10.0, 150.0, 30.0, 40.0), // y0 = 200-150-40 = 10
                FaceDetection::new(120.0, 20.0, 40.0, 40.0), // y0 = 200-20-40 = 140
            ],
            STROKE,
            1,
        );
        assert_eq!(*canvas.get_pixel(10, 10), STROKE);
        assert_eq!(*canvas.get_pixel(120, 140), STROKE);
        // Disjoint boxes: perimeter sums add up.
        let first = 31 + 31 + 41 + 41 - 4;
        let second = 41 + 41 + 41 + 41 - 4;
        assert_eq!(count_stroke_pixels(&canvas), first + second);
    }

    #[test]
    fn off_frame_box_is_skipped() {
        let image = test_image(100, 100);
        let canvas = render_overlay(
            &image,
            &[FaceDetection::new(500.0, 500.0, 30.0, 30.0)],
            STROKE,
            3,
        );
        assert_eq!(count_stroke_pixels(&canvas), 0);
    }

    #[test]
    fn partially_off_frame_box_is_clipped_not_panicking() {
        let canvas = render_overlay(
            &test_image(100, 100),
            &[FaceDetection::new(80.0, -50.0, 100.0, 200.0)],
            STROKE,
            2,
        );
        assert!(count_stroke_pixels(&canvas) > 0);
    }

    #[test]
    fn zero_stroke_width_draws_nothing() {
        let canvas = render_overlay(
            &test_image(100, 100),
            &[FaceDetection::new(10.0, 20.0, 30.0, 40.0)],
            STROKE,
            0,
        );
        assert_eq!(count_stroke_pixels(&canvas), 0);
    }
}
