//! Convex hull algorithms.
//!
//! Two algorithms with the same contract: fewer than three input points give
//! an empty hull, otherwise the hull vertices come back in counter-clockwise
//! order in a y-up frame (positive shoelace sum). Interior and collinear
//! boundary points are dropped.
//!
//! # Example
//!
//! ```
//! use polykit::hull::{convex_hull, HullAlgorithm};
//! use polykit::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points, HullAlgorithm::MonotoneChain);
//!
//! // Hull should be the 4 corners (interior point excluded)
//! assert_eq!(hull.len(), 4);
//! ```

use crate::primitives::Point2;
use crate::tolerance::{cross_product, Tolerances};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::debug;

/// Selects the hull algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HullAlgorithm {
    /// Andrew's monotone chain.
    #[default]
    MonotoneChain,
    /// Graham-style angular sweep around the lowest point.
    AngularSweep,
}

/// Computes the convex hull with the chosen algorithm.
///
/// Returns an empty vector for fewer than three points. The input is not
/// modified.
pub fn convex_hull<F: Float>(points: &[Point2<F>], algorithm: HullAlgorithm) -> Vec<Point2<F>> {
    let hull = match algorithm {
        HullAlgorithm::MonotoneChain => monotone_chain(points),
        HullAlgorithm::AngularSweep => angular_sweep(points),
    };
    debug!(
        ?algorithm,
        points = points.len(),
        hull = hull.len(),
        "computed convex hull"
    );
    hull
}

/// Computes the convex hull using Andrew's monotone chain algorithm.
///
/// # Algorithm
///
/// 1. Sort points lexicographically (by x, then by y)
/// 2. Build the lower hull from left to right
/// 3. Build the upper hull from right to left
/// 4. Concatenate, removing duplicate endpoints
///
/// A point is popped while the last turn is not strictly left
/// (`cross <= 0`), so collinear points never appear in the hull.
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// # Example
///
/// ```
/// use polykit::hull::monotone_chain;
/// use polykit::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = monotone_chain(&points);
/// assert_eq!(hull.len(), 4); // Square corners
/// assert_eq!(hull[0], Point2::new(0.0, 0.0));
/// ```
pub fn monotone_chain<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return Vec::new();
    }

    // Sort points lexicographically
    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    // Build lower hull
    let mut lower: Vec<Point2<F>> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2
            && cross_product(lower[lower.len() - 2], lower[lower.len() - 1], p) <= F::zero()
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Build upper hull
    let mut upper: Vec<Point2<F>> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && cross_product(upper[upper.len() - 2], upper[upper.len() - 1], p) <= F::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Remove last point of each half because it's repeated
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Computes the convex hull by an angular sweep, using default tolerances.
///
/// # Algorithm
///
/// 1. Pick the pivot: lowest y, then lowest x
/// 2. Sort the other points by polar angle around the pivot, comparing by
///    the sign of the cross product; nearly collinear points (cross below
///    the angular tolerance) are ordered nearer first
/// 3. Sweep, popping while the last turn is not strictly left
///
/// # Complexity
///
/// - Time: O(n log n)
/// - Space: O(n)
///
/// # Example
///
/// ```
/// use polykit::hull::angular_sweep;
/// use polykit::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 0.0),
/// ];
///
/// let hull = angular_sweep(&points);
/// assert_eq!(hull.len(), 4);
/// assert_eq!(hull[0], Point2::new(0.0, 0.0)); // Pivot first
/// ```
pub fn angular_sweep<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    angular_sweep_with(points, Tolerances::default().angular)
}

/// [`angular_sweep`] with an explicit angular tie-break tolerance.
pub fn angular_sweep_with<F: Float>(points: &[Point2<F>], eps: F) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut work = points.to_vec();
    let pivot_idx = (1..work.len()).fold(0, |best, i| {
        let (p, q) = (work[i], work[best]);
        if p.y < q.y || (p.y == q.y && p.x < q.x) {
            i
        } else {
            best
        }
    });
    work.swap(0, pivot_idx);
    let pivot = work[0];

    work[1..].sort_by(|&a, &b| {
        let turn = cross_product(pivot, a, b);
        if turn.abs() < eps {
            pivot
                .distance_squared(a)
                .partial_cmp(&pivot.distance_squared(b))
                .unwrap_or(Ordering::Equal)
        } else if turn > F::zero() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });

    let mut hull: Vec<Point2<F>> = vec![work[0], work[1]];
    for &p in &work[2..] {
        while hull.len() > 1 && cross_product(hull[hull.len() - 2], hull[hull.len() - 1], p) <= F::zero()
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull
}

/// Tests if a point is inside a convex hull.
///
/// The hull must be in the order returned by [`convex_hull`]. A point on the
/// boundary, or outside by less than `eps` in cross-product terms, counts as
/// inside.
///
/// # Example
///
/// ```
/// use polykit::hull::{convex_hull, point_in_convex_hull, HullAlgorithm};
/// use polykit::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = convex_hull(&points, HullAlgorithm::AngularSweep);
///
/// assert!(point_in_convex_hull(&hull, Point2::new(1.0, 1.0), 1e-10)); // Center
/// assert!(point_in_convex_hull(&hull, Point2::new(0.0, 0.0), 1e-10)); // Corner
/// assert!(!point_in_convex_hull(&hull, Point2::new(3.0, 3.0), 1e-10)); // Outside
/// ```
pub fn point_in_convex_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>, eps: F) -> bool {
    if hull.len() < 3 {
        return false;
    }

    // Inside means on the left of (or on) every edge
    let n = hull.len();
    (0..n).all(|i| cross_product(hull[i], hull[(i + 1) % n], point) >= -eps)
}
