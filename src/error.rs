//! Error types for polykit operations.

use thiserror::Error;

/// Errors reported by polygon validation and triangulation.
///
/// None of these are fatal: the caller is expected to discard the operation
/// in progress and return to an idle state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Fewer vertices than the requested operation needs.
    #[error("insufficient vertices: {required} required, {found} given")]
    InsufficientVertices {
        /// Minimum number of vertices the operation accepts.
        required: usize,
        /// Number of vertices actually supplied.
        found: usize,
    },

    /// Two non-adjacent edges of the polygon touch or cross.
    #[error("polygon is self-intersecting")]
    SelfIntersectingPolygon,

    /// An edge starts and ends at the same point.
    #[error("zero-length edge starting at vertex {index}")]
    DegenerateEdge {
        /// Index of the edge's first vertex.
        index: usize,
    },

    /// Ear clipping used up its attempt budget before reducing the polygon
    /// to a single triangle.
    #[error("triangulation stalled after {attempts} attempts")]
    TriangulationStalled {
        /// Number of ear scans performed.
        attempts: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;
