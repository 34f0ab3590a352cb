//! Simple-polygon validation.
//!
//! A polygon is simple when no edge has zero length and no two non-adjacent
//! edges touch. This check gates triangulation and boolean operations.
//!
//! # Example
//!
//! ```
//! use polykit::{Point2, polygon::{Polygon, is_simple_polygon}};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//! assert!(is_simple_polygon(&square));
//!
//! // Figure-8: edges 0 and 2 cross
//! let bowtie = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//! assert!(!is_simple_polygon(&bowtie));
//! ```

use super::core::Polygon;
use crate::error::{GeometryError, Result};
use crate::tolerance::{segments_intersect, Tolerances};
use num_traits::Float;
use tracing::warn;

/// Checks that a polygon is simple, using default tolerances.
///
/// Fewer than four vertices always pass: with fewer than three there is
/// nothing to intersect, and a triangle's edges are pairwise adjacent.
pub fn is_simple_polygon<F: Float>(polygon: &Polygon<F>) -> bool {
    find_defect(polygon, Tolerances::default().containment).is_none()
}

/// Checks that a polygon has at least three vertices and is simple.
///
/// Reports the first defect found: too few vertices, then zero-length
/// edges (lowest index first), then crossing edges.
pub fn validate_polygon<F: Float>(polygon: &Polygon<F>) -> Result<()> {
    validate_polygon_with(polygon, &Tolerances::default())
}

/// [`validate_polygon`] with custom tolerances.
pub fn validate_polygon_with<F: Float>(polygon: &Polygon<F>, tol: &Tolerances<F>) -> Result<()> {
    if polygon.len() < 3 {
        return Err(GeometryError::InsufficientVertices {
            required: 3,
            found: polygon.len(),
        });
    }

    match find_defect(polygon, tol.containment) {
        None => Ok(()),
        Some(err) => {
            warn!(vertices = polygon.len(), error = %err, "polygon rejected");
            Err(err)
        }
    }
}

fn find_defect<F: Float>(polygon: &Polygon<F>, eps: F) -> Option<GeometryError> {
    let n = polygon.len();
    if n <= 3 {
        return None;
    }

    let edges: Vec<_> = polygon.edges().collect();

    if let Some(index) = edges.iter().position(|e| e.is_zero_length()) {
        return Some(GeometryError::DegenerateEdge { index });
    }

    for i in 0..n {
        for j in (i + 1)..n {
            // Same edge or sharing a vertex
            if j == (i + 1) % n || i == (j + 1) % n {
                continue;
            }

            let (a, b) = (edges[i], edges[j]);
            if segments_intersect(a.start, a.end, b.start, b.end, eps) {
                return Some(GeometryError::SelfIntersectingPolygon);
            }
        }
    }

    None
}
