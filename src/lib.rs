//! polykit - Planar polygon toolkit
//!
//! Convex hulls, simple-polygon validation, ear-clipping triangulation,
//! shoelace area and polygon intersection/union, over `f32` or `f64`.
//!
//! Tolerances are fixed and absolute (see [`tolerance::Tolerances`]); rescale
//! inputs with very large or very small coordinates first. Coordinates are
//! assumed to come from a screen, with `y` growing downward, which is what
//! [`polygon::Winding`] names refer to.

pub mod api;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod session;
pub mod tolerance;

pub use error::{GeometryError, Result};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{
    cross_product, line_segment_intersection, on_segment, orient2d, segments_intersect,
    Orientation, SegmentCrossing, Tolerances,
};
