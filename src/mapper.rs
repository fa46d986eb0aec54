use crate::error::FocusError;
use crate::geometry::{Point, Rect, Size};
use crate::roi::RegionOfInterest;
use crate::FocusOptions;

/// How a region of interest is fitted to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramingPolicy {
    /// Cut a generously padded crop window out of the unscaled image. Suits
    /// a fixed crop target where the output keeps the image's resolution.
    ContextExpansion,
    /// Scale the image so it fully covers a fixed viewport, then slide the
    /// excess so the region of interest stays in view. Suits thumbnail slots
    /// and any fixed-size display area.
    #[default]
    AspectFill,
}

/// The values a caller applies to present an image inside a viewport.
///
/// Recomputed per (image, detections, viewport) triple; carries no identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingResult {
    /// Image dimensions after aspect-fill scaling. Equal to the input image
    /// size under [`FramingPolicy::ContextExpansion`], which never scales.
    pub scaled_image_size: Size,
    /// Translation to apply to the scaled image, already negated so content
    /// shifts toward the viewport origin.
    pub display_offset: Point,
    /// Frame of the scaled image relative to the viewport origin (aspect
    /// fill), or the crop window in image coordinates (context expansion).
    pub display_frame: Rect,
}

/// Map a region of interest onto a viewport under the configured policy.
///
/// Pure function of its inputs; safe to call from any thread.
///
/// # Errors
///
/// [`FocusError::DegenerateSize`] for a zero/negative/non-finite image or
/// viewport dimension, [`FocusError::InvalidOption`] for unusable tuning
/// values.
pub fn map_to_viewport(
    roi: &RegionOfInterest,
    image_size: Size,
    viewport_size: Size,
    options: &FocusOptions,
) -> Result<MappingResult, FocusError> {
    image_size.ensure_valid("image size")?;
    viewport_size.ensure_valid("viewport size")?;
    if !options.expansion_factor.is_finite() || options.expansion_factor < 1.0 {
        return Err(FocusError::InvalidOption {
            name: "expansion_factor",
            value: options.expansion_factor,
        });
    }
    if !options.vertical_anchor.is_finite() {
        return Err(FocusError::InvalidOption {
            name: "vertical_anchor",
            value: options.vertical_anchor,
        });
    }

    Ok(match options.policy {
        FramingPolicy::ContextExpansion => {
            context_expansion(roi, image_size, options.expansion_factor)
        }
        FramingPolicy::AspectFill => {
            aspect_fill(roi, image_size, viewport_size, options.vertical_anchor)
        }
    })
}

/// Grow the tight face box by `factor` on each axis (capped at the image
/// dimensions), spreading the extra margin evenly around the original box,
/// and clamp the origin so the window never starts outside the image.
fn context_expansion(roi: &RegionOfInterest, image_size: Size, factor: f64) -> MappingResult {
    let new_w = (roi.rect.width * factor).min(image_size.width);
    let new_h = (roi.rect.height * factor).min(image_size.height);
    // Even split of the added margin: a quarter of the grown box per side
    // when the factor is 2.
    let margin = (factor - 1.0) / (2.0 * factor);
    let new_x = (roi.rect.x - new_w * margin).max(0.0);
    let new_y = (roi.rect.y - new_h * margin).max(0.0);

    MappingResult {
        scaled_image_size: image_size,
        display_offset: Point::new(-new_x, -new_y),
        display_frame: Rect::new(new_x, new_y, new_w, new_h),
    }
}

/// Scale the image to cover the viewport on the constraining axis, then
/// slide it along the free axis so the region of interest is pulled into
/// view, clamped so the viewport never reveals space outside the image.
fn aspect_fill(
    roi: &RegionOfInterest,
    image_size: Size,
    viewport_size: Size,
    vertical_anchor: f64,
) -> MappingResult {
    let mut offset = Point::default();

    let scaled = if image_size.aspect() > viewport_size.aspect() {
        // Relatively wider: height fills, slide horizontally toward the
        // viewport's horizontal center.
        let height = viewport_size.height;
        let width = image_size.aspect() * height;
        let center_x = roi.center().x * (width / image_size.width);
        let max_slide = (width - viewport_size.width).max(0.0);
        let x = (center_x - viewport_size.width * 0.5).clamp(0.0, max_slide);
        offset.x = -x;
        Size::new(width, height)
    } else {
        // Relatively taller: width fills, slide vertically toward the anchor
        // point rather than dead center so faces sit in the upper-middle.
        let width = viewport_size.width;
        let height = image_size.height / image_size.width * width;
        let center_y = roi.center().y * (width / image_size.width);
        let max_slide = (height - viewport_size.height).max(0.0);
        let y = (center_y - viewport_size.height * vertical_anchor).clamp(0.0, max_slide);
        offset.y = -y;
        Size::new(width, height)
    };

    MappingResult {
        scaled_image_size: scaled,
        display_offset: offset,
        display_frame: Rect::new(offset.x, offset.y, scaled.width, scaled.height),
    }
}
