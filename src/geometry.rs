use crate::error::FocusError;

/// A point in image or display space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// `true` when either dimension is zero, negative, or non-finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Reject a degenerate size as a caller contract violation.
    pub(crate) fn ensure_valid(&self, what: &'static str) -> Result<(), FocusError> {
        if self.is_degenerate() {
            return Err(FocusError::DegenerateSize {
                what,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in pixels.
///
/// The origin convention (top-left vs bottom-left) is owned by the caller;
/// [`Rect::flip_y`] converts between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge (top-left origin) or bottom edge (bottom-left origin).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Far edge on the y axis.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Minimal rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(x, y, max_x - x, max_y - y)
    }

    /// Overlap of two rectangles; disjoint inputs collapse to zero size.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        Rect::new(x, y, (max_x - x).max(0.0), (max_y - y).max(0.0))
    }

    /// Convert between bottom-left-origin and top-left-origin coordinates
    /// within a container of the given height. The transform is its own
    /// inverse.
    pub fn flip_y(&self, container_height: f64) -> Rect {
        Rect::new(
            self.x,
            container_height - self.y - self.height,
            self.width,
            self.height,
        )
    }

    /// All coordinates finite and both dimensions strictly positive.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both_inputs() {
        let a = Rect::new(10.0, 20.0, 30.0, 40.0);
        let b = Rect::new(50.0, 5.0, 10.0, 10.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(10.0, 5.0, 50.0, 55.0));
    }

    #[test]
    fn union_is_commutative() {
        let a = Rect::new(0.0, 0.0, 5.0, 5.0);
        let b = Rect::new(-3.0, 2.0, 4.0, 10.0);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_with_contained_rect_is_identity() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert_eq!(outer.union(&inner), outer);
    }

    #[test]
    fn intersect_clamps_to_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 60.0, 100.0, 100.0);
        assert_eq!(a.intersect(&b), Rect::new(50.0, 60.0, 50.0, 40.0));
    }

    #[test]
    fn disjoint_intersection_has_zero_size() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        let i = a.intersect(&b);
        assert_eq!(i.width, 0.0);
        assert_eq!(i.height, 0.0);
    }

    #[test]
    fn flip_y_is_its_own_inverse() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.flip_y(200.0).flip_y(200.0), r);
    }

    #[test]
    fn flip_y_maps_bottom_left_to_top_left() {
        // A box whose bottom edge sits 20px above the bottom of a 200px-tall
        // image has its top edge 140px below the top.
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.flip_y(200.0), Rect::new(10.0, 140.0, 30.0, 40.0));
    }

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn degenerate_sizes_are_flagged() {
        assert!(Size::new(0.0, 100.0).is_degenerate());
        assert!(Size::new(100.0, -1.0).is_degenerate());
        assert!(Size::new(f64::NAN, 100.0).is_degenerate());
        assert!(Size::new(100.0, f64::INFINITY).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn rect_validity_rejects_nan_and_empty() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).is_valid());
        assert!(!Rect::new(f64::NAN, 0.0, 10.0, 10.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 10.0, -5.0).is_valid());
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
    }
}
