//! Polygon triangulation using ear clipping.
//!
//! # Algorithm
//!
//! The polygon is oriented so that convex corners turn left. Consecutive
//! vertex triples are scanned from the start; a triple is an ear when its
//! middle corner is strictly convex and no other remaining vertex lies inside
//! or on the candidate triangle. Each ear found is emitted and its middle
//! vertex removed, and the scan restarts. When three vertices remain they
//! form the last triangle.
//!
//! The number of scans is capped at `2n`. A scan that finds no ear aborts
//! the triangulation, because rescanning the same vertex list cannot succeed.
//!
//! # Complexity
//!
//! - Time: O(n²) for a polygon with n vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use polykit::polygon::{Polygon, triangulate};
//! use polykit::Point2;
//!
//! let square: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! let triangulation = triangulate(&square).unwrap();
//! assert_eq!(triangulation.len(), 2);
//! assert!((triangulation.area() - 100.0).abs() < 1e-9);
//! ```

use super::core::Polygon;
use super::validate::validate_polygon_with;
use crate::error::{GeometryError, Result};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{cross_product, Tolerances};
use num_traits::Float;
use tracing::{debug, warn};

/// A triangle produced by triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    /// First corner.
    pub a: Point2<F>,
    /// Second corner.
    pub b: Point2<F>,
    /// Third corner.
    pub c: Point2<F>,
}

impl<F: Float> Triangle<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// The three corners in order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges, `a-b`, `b-c`, `c-a`.
    pub fn edges(&self) -> [Segment2<F>; 3] {
        [
            Segment2::new(self.a, self.b),
            Segment2::new(self.b, self.c),
            Segment2::new(self.c, self.a),
        ]
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        cross_product(self.a, self.b, self.c).abs() / F::from(2.0).unwrap()
    }

    /// Tests whether `p` is inside or on the boundary of the triangle.
    ///
    /// Compares the summed unsigned areas of the three sub-triangles formed
    /// with `p` against the full area; they agree within `eps` exactly when
    /// `p` is not outside. Vertex order does not matter.
    pub fn contains(&self, p: Point2<F>, eps: F) -> bool {
        let total = cross_product(self.a, self.b, self.c).abs();
        let parts = cross_product(p, self.a, self.b).abs()
            + cross_product(p, self.b, self.c).abs()
            + cross_product(p, self.c, self.a).abs();

        (parts - total).abs() < eps
    }
}

/// The output of [`triangulate`]: the ears in the order they were clipped,
/// plus the boundary they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<F> {
    /// Triangles covering the polygon.
    pub triangles: Vec<Triangle<F>>,
    boundary: Polygon<F>,
}

impl<F: Float> Triangulation<F> {
    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Summed area of all triangles.
    pub fn area(&self) -> F {
        self.triangles
            .iter()
            .map(Triangle::area)
            .fold(F::zero(), |acc, a| acc + a)
    }

    /// The polygon that was triangulated, with any closing duplicate removed.
    pub fn boundary(&self) -> &Polygon<F> {
        &self.boundary
    }

    /// Triangle edges that are not boundary edges, each listed once.
    pub fn diagonals(&self) -> Vec<Segment2<F>> {
        let mut out: Vec<Segment2<F>> = Vec::new();
        for edge in self.triangles.iter().flat_map(Triangle::edges) {
            if self.boundary.has_edge(edge.start, edge.end) {
                continue;
            }
            let seen = out.iter().any(|d| {
                (d.start == edge.start && d.end == edge.end)
                    || (d.start == edge.end && d.end == edge.start)
            });
            if !seen {
                out.push(edge);
            }
        }
        out
    }
}

/// Triangulates a simple polygon by ear clipping, using default tolerances.
///
/// An explicitly repeated closing vertex is dropped first. The polygon must
/// then have at least three vertices and be simple; otherwise the
/// validation error is returned. A valid polygon with n vertices yields
/// n - 2 triangles.
///
/// # Errors
///
/// - [`GeometryError::InsufficientVertices`], [`GeometryError::DegenerateEdge`]
///   or [`GeometryError::SelfIntersectingPolygon`] from validation.
/// - [`GeometryError::TriangulationStalled`] if no ear can be found before
///   the polygon is reduced to one triangle. No partial result is returned.
pub fn triangulate<F: Float>(polygon: &Polygon<F>) -> Result<Triangulation<F>> {
    triangulate_with(polygon, &Tolerances::default())
}

/// [`triangulate`] with custom tolerances.
pub fn triangulate_with<F: Float>(
    polygon: &Polygon<F>,
    tol: &Tolerances<F>,
) -> Result<Triangulation<F>> {
    let mut boundary = polygon.clone();
    if boundary.len() > 1 && boundary.vertices.first() == boundary.vertices.last() {
        boundary.vertices.pop();
    }

    validate_polygon_with(&boundary, tol)?;

    // Positive shoelace sum: convex corners have positive cross products.
    let mut remaining = boundary.vertices.clone();
    if boundary.area_sign() < F::zero() {
        remaining.reverse();
    }

    let n = remaining.len();
    let max_attempts = 2 * n;
    let mut attempts = 0;
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 && attempts < max_attempts {
        attempts += 1;

        match find_ear(&remaining, tol.containment) {
            Some(i) => {
                let m = remaining.len();
                triangles.push(Triangle::new(
                    remaining[i],
                    remaining[(i + 1) % m],
                    remaining[(i + 2) % m],
                ));
                remaining.remove((i + 1) % m);
            }
            None => break,
        }
    }

    if remaining.len() != 3 {
        warn!(
            vertices = n,
            remaining = remaining.len(),
            attempts,
            "ear clipping stalled"
        );
        return Err(GeometryError::TriangulationStalled { attempts });
    }

    triangles.push(Triangle::new(remaining[0], remaining[1], remaining[2]));
    debug!(vertices = n, triangles = triangles.len(), "triangulated polygon");

    Ok(Triangulation {
        triangles,
        boundary,
    })
}

/// Finds the first `i` such that `(i, i+1, i+2)` is an ear.
fn find_ear<F: Float>(vertices: &[Point2<F>], eps: F) -> Option<usize> {
    let m = vertices.len();

    (0..m).find(|&i| {
        let (i1, i2) = ((i + 1) % m, (i + 2) % m);
        let ear = Triangle::new(vertices[i], vertices[i1], vertices[i2]);

        if cross_product(ear.a, ear.b, ear.c) <= F::zero() {
            return false;
        }

        !vertices
            .iter()
            .enumerate()
            .any(|(j, &p)| j != i && j != i1 && j != i2 && ear.contains(p, eps))
    })
}
