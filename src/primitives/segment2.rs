//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A closed segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// True when both endpoints are the same point.
    ///
    /// Exact comparison: a polygon edge is zero-length only if two
    /// consecutive clicks landed on the same coordinates.
    #[inline]
    pub fn is_zero_length(self) -> bool {
        self.start == self.end
    }

    /// True if `p` lies in the axis-aligned bounding box of the segment,
    /// boundary included.
    #[inline]
    pub fn bbox_contains(self, p: Point2<F>) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }

    /// True if `p` is one of the two endpoints.
    #[inline]
    pub fn has_endpoint(self, p: Point2<F>) -> bool {
        p == self.start || p == self.end
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_direction() {
        let s = seg((1.0, 1.0), (4.0, 5.0));
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_zero_length() {
        let degen = seg((1.0, 1.0), (1.0, 1.0));
        assert!(degen.is_zero_length());

        let tiny = seg((1.0, 1.0), (1.0, 1.0 + 1e-12));
        assert!(!tiny.is_zero_length());
    }

    #[test]
    fn test_bbox_contains() {
        let s = seg((4.0, 0.0), (0.0, 2.0));
        assert!(s.bbox_contains(Point2::new(2.0, 1.0)));
        assert!(s.bbox_contains(Point2::new(0.0, 0.0)));
        assert!(!s.bbox_contains(Point2::new(5.0, 1.0)));
        assert!(!s.bbox_contains(Point2::new(2.0, -0.5)));
    }

    #[test]
    fn test_has_endpoint() {
        let s = seg((0.0, 0.0), (2.0, 2.0));
        assert!(s.has_endpoint(Point2::new(2.0, 2.0)));
        assert!(!s.has_endpoint(Point2::new(1.0, 1.0)));
    }
}
