//! Entry points for an interactive front end.
//!
//! Each function takes the raw point containers a shell accumulates from
//! user input and returns the structure to display. Nothing here keeps
//! state between calls; see [`session`](crate::session) for the
//! event-driven wrapper.

use crate::error::Result;
use crate::hull::{convex_hull, HullAlgorithm};
use crate::polygon::{
    boolean_op, is_simple_polygon, polygon_area, BooleanMethod, BooleanOp, Polygon, Triangle,
};
use crate::primitives::Point2;
use num_traits::Float;

/// Convex hull of a point set. Empty for fewer than three points.
pub fn compute_convex_hull<F: Float>(
    points: &[Point2<F>],
    algorithm: HullAlgorithm,
) -> Vec<Point2<F>> {
    convex_hull(points, algorithm)
}

/// True if the vertex list forms a simple polygon.
pub fn validate_simple_polygon<F: Float>(vertices: &[Point2<F>]) -> bool {
    is_simple_polygon(&Polygon::new(vertices.to_vec()))
}

/// Ear-clipping triangulation of a simple polygon.
///
/// # Errors
///
/// See [`polygon::triangulate`](crate::polygon::triangulate).
pub fn triangulate<F: Float>(vertices: &[Point2<F>]) -> Result<Vec<Triangle<F>>> {
    crate::polygon::triangulate(&Polygon::new(vertices.to_vec())).map(|t| t.triangles)
}

/// Unsigned shoelace area.
pub fn compute_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_area(vertices)
}

/// Intersection or union of two polygons, as a list of contours.
pub fn compute_boolean_op<F: Float>(
    a: &[Point2<F>],
    b: &[Point2<F>],
    method: BooleanMethod,
    op: BooleanOp,
) -> Vec<Polygon<F>> {
    boolean_op(
        &Polygon::new(a.to_vec()),
        &Polygon::new(b.to_vec()),
        method,
        op,
    )
}
