//! Orientation and segment predicates.
//!
//! Sign convention for [`cross_product`]: positive is a left turn, negative a
//! right turn, zero collinear. Every higher-level orientation decision in the
//! crate derives from this sign.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn (positive cross product).
    CounterClockwise,
    /// Right turn (negative cross product).
    Clockwise,
    /// Collinear within tolerance.
    Collinear,
}

/// Twice the signed area of the triangle `p1, p2, p3`.
///
/// This is the cross product of `p1 -> p2` and `p1 -> p3`.
#[inline]
pub fn cross_product<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> F {
    (p2 - p1).cross(p3 - p1)
}

/// Classifies the turn `a -> b -> c`.
///
/// Cross products with absolute value below `eps` count as collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = cross_product(a, b, c);

    if cross.abs() < eps {
        Orientation::Collinear
    } else if cross > F::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Tests whether `c` lies on the closed segment `a b`.
///
/// Requires both bounding-box containment and collinearity
/// (`|cross| < eps`).
#[inline]
pub fn on_segment<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> bool {
    Segment2::new(a, b).bbox_contains(c) && orient2d(a, b, c, eps) == Orientation::Collinear
}

/// Largest coordinate magnitude evaluated in integer arithmetic. Differences
/// stay below 2^63, so both products and their difference fit in `i128`.
const EXACT_LIMIT: u64 = 1 << 62;

/// Converts a whole-number coordinate to `i128`, if it is within
/// [`EXACT_LIMIT`].
#[inline]
fn whole<F: Float>(v: F) -> Option<i128> {
    if v.fract() != F::zero() {
        return None;
    }
    let n = v.to_i64()?;
    (n.unsigned_abs() < EXACT_LIMIT).then_some(i128::from(n))
}

/// Exact orientation of `a, b, c` when every coordinate is a whole number.
#[inline]
fn exact_cross<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<i128> {
    let (ax, ay) = (whole(a.x)?, whole(a.y)?);
    let (bx, by) = (whole(b.x)?, whole(b.y)?);
    let (cx, cy) = (whole(c.x)?, whole(c.y)?);
    Some((bx - ax) * (cy - ay) - (by - ay) * (cx - ax))
}

/// Sign of the turn `a -> b -> c`: 1 left, -1 right, 0 collinear.
///
/// Whole-number input (screen pixels) is decided exactly in `i128`. Anything
/// else falls back to the floating-point cross product, with `|cross| < eps`
/// counting as collinear.
#[inline]
fn orient_sign<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> i8 {
    if let Some(cross) = exact_cross(a, b, c) {
        return cross.signum() as i8;
    }
    match orient2d(a, b, c, eps) {
        Orientation::CounterClockwise => 1,
        Orientation::Clockwise => -1,
        Orientation::Collinear => 0,
    }
}

/// Tests whether segments `p1 p2` and `q1 q2` touch anywhere other than a
/// shared endpoint.
///
/// True when the segments cross strictly (each straddles the other's line),
/// or when an endpoint of one lies on the other without coinciding with one
/// of its endpoints. Collinear overlap is caught by the second rule.
///
/// `eps` is the collinearity tolerance for non-integer coordinates, also
/// forwarded to [`on_segment`].
pub fn segments_intersect<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    q1: Point2<F>,
    q2: Point2<F>,
    eps: F,
) -> bool {
    let o1 = orient_sign(p1, p2, q1, eps);
    let o2 = orient_sign(p1, p2, q2, eps);
    let o3 = orient_sign(q1, q2, p1, eps);
    let o4 = orient_sign(q1, q2, p2, eps);

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }

    let p = Segment2::new(p1, p2);
    let q = Segment2::new(q1, q2);

    (o1 == 0 && on_segment(p1, p2, q1, eps) && !p.has_endpoint(q1))
        || (o2 == 0 && on_segment(p1, p2, q2, eps) && !p.has_endpoint(q2))
        || (o3 == 0 && on_segment(q1, q2, p1, eps) && !q.has_endpoint(p1))
        || (o4 == 0 && on_segment(q1, q2, p2, eps) && !q.has_endpoint(p2))
}

/// A strict interior crossing of two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCrossing<F> {
    /// The crossing point.
    pub point: Point2<F>,
    /// Parameter along the first segment.
    pub t: F,
    /// Parameter along the second segment.
    pub u: F,
}

/// Solves for the crossing of `p1 p2` and `p3 p4` with Cramer's rule.
///
/// Returns `None` when the determinant is below `eps` in absolute value
/// (parallel or collinear), or unless both parameters lie strictly inside
/// `(eps, 1 - eps)`. Touching at an endpoint is therefore not a crossing here.
pub fn line_segment_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
    eps: F,
) -> Option<SegmentCrossing<F>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let det = d1.cross(d2);

    if det.abs() < eps {
        return None;
    }

    let w = p3 - p1;
    let t = w.cross(d2) / det;
    let u = w.cross(d1) / det;

    let upper = F::one() - eps;
    if t > eps && t < upper && u > eps && u < upper {
        Some(SegmentCrossing {
            point: p1 + d1 * t,
            t,
            u,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_cross_product_sign() {
        assert!(cross_product(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)) > 0.0);
        assert!(cross_product(p(0.0, 0.0), p(1.0, 0.0), p(0.0, -1.0)) < 0.0);
        assert_eq!(cross_product(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0)), 0.0);
    }

    #[test]
    fn test_orient2d() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        assert_eq!(orient2d(a, b, p(0.5, 1.0), EPS), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, p(0.5, -1.0), EPS), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, p(0.5, 1e-12), EPS), Orientation::Collinear);
    }

    #[test]
    fn test_on_segment() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 10.0);
        assert!(on_segment(a, b, p(5.0, 5.0), EPS));
        assert!(on_segment(a, b, a, EPS));
        assert!(on_segment(a, b, b, EPS));
        assert!(!on_segment(a, b, p(11.0, 11.0), EPS));
        assert!(!on_segment(a, b, p(5.0, 5.5), EPS));
    }

    #[test]
    fn test_segments_intersect_crossing() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(10.0, 0.0),
            EPS
        ));
    }

    #[test]
    fn test_segments_intersect_t_junction() {
        // q1 sits in the interior of p
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 0.0),
            p(5.0, 5.0),
            EPS
        ));
    }

    #[test]
    fn test_segments_shared_endpoint_is_not_intersection() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(5.0, 5.0),
            p(5.0, 5.0),
            p(10.0, 0.0),
            EPS
        ));
    }

    #[test]
    fn test_segments_collinear_overlap() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 0.0),
            p(15.0, 0.0),
            EPS
        ));
    }

    #[test]
    fn test_segments_collinear_touching() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(5.0, 0.0),
            p(5.0, 0.0),
            p(10.0, 0.0),
            EPS
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(4.0, 4.0),
            p(6.0, 4.0),
            p(10.0, 0.0),
            EPS
        ));
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(0.0, 1.0),
            p(10.0, 1.0),
            EPS
        ));
    }

    #[test]
    fn test_segments_intersect_large_coordinates() {
        let big = 1.0e12;
        assert!(segments_intersect(
            p(-big, -big),
            p(big, big),
            p(-big, big),
            p(big, -big),
            EPS
        ));
        assert!(!segments_intersect(
            p(-big, -big),
            p(big, -big),
            p(-big, big),
            p(big, big),
            EPS
        ));
    }

    #[test]
    fn test_segments_intersect_sub_unit_coordinates() {
        // Cross products here are all below one in magnitude
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(0.5, 0.5),
            p(0.5, 0.0),
            p(0.0, 0.5),
            EPS
        ));
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(0.5, 0.0),
            p(0.0, 0.25),
            p(0.5, 0.25),
            EPS
        ));
        // T-junction at fractional coordinates
        assert!(segments_intersect(
            p(0.1, 0.1),
            p(0.7, 0.1),
            p(0.4, 0.1),
            p(0.4, 0.6),
            EPS
        ));
    }

    #[test]
    fn test_orient_sign_exact_for_whole_coordinates() {
        // In f64 both products round to the same value and the cross is zero
        let a = p(0.0, 0.0);
        let b = p(134_217_729.0, 134_217_727.0);
        let c = p(134_217_730.0, 134_217_728.0);
        assert_eq!(cross_product(a, b, c), 0.0);
        assert_eq!(orient_sign(a, b, c, EPS), 1);
        assert_eq!(orient_sign(a, c, b, EPS), -1);
        assert_eq!(orient_sign(p(0.5, 0.0), p(1.5, 1.0), p(2.5, 2.0), EPS), 0);
    }

    #[test]
    fn test_line_segment_intersection_crossing() {
        let hit = line_segment_intersection(
            p(0.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(10.0, 0.0),
            1e-9,
        )
        .unwrap();
        assert_relative_eq!(hit.point.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point.y, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hit.t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.u, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_line_segment_intersection_parameters_differ() {
        let hit = line_segment_intersection(
            p(0.0, 4.0),
            p(4.0, 4.0),
            p(2.0, 2.0),
            p(2.0, 6.0),
            1e-9,
        )
        .unwrap();
        assert_relative_eq!(hit.t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.u, 0.5, epsilon = 1e-12);

        let hit = line_segment_intersection(
            p(0.0, 0.0),
            p(8.0, 0.0),
            p(2.0, -1.0),
            p(2.0, 3.0),
            1e-9,
        )
        .unwrap();
        assert_relative_eq!(hit.t, 0.25, epsilon = 1e-12);
        assert_relative_eq!(hit.u, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_line_segment_intersection_excludes_endpoints() {
        // T-junction at the end of the second segment
        assert!(line_segment_intersection(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 5.0),
            p(5.0, 0.0),
            1e-9
        )
        .is_none());
        // Shared endpoint
        assert!(line_segment_intersection(
            p(0.0, 0.0),
            p(5.0, 5.0),
            p(5.0, 5.0),
            p(10.0, 0.0),
            1e-9
        )
        .is_none());
    }

    #[test]
    fn test_line_segment_intersection_parallel() {
        assert!(line_segment_intersection(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(0.0, 1.0),
            p(10.0, 1.0),
            1e-9
        )
        .is_none());
        assert!(line_segment_intersection(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 0.0),
            p(15.0, 0.0),
            1e-9
        )
        .is_none());
    }
}
