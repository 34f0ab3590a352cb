//! Polygon operations: validation, area, triangulation and boolean operations.
//!
//! This module provides:
//! - Shoelace area and winding
//! - Point containment testing
//! - Simple-polygon validation
//! - Ear-clipping triangulation
//! - Intersection and union, by library clipping or Weiler–Atherton
//!
//! # Example
//!
//! ```
//! use polykit::polygon::{boolean_op, BooleanMethod, BooleanOp, Polygon};
//! use polykit::Point2;
//!
//! // Two overlapping squares
//! let square1 = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! let square2 = Polygon::new(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ]);
//!
//! let intersection = boolean_op(
//!     &square1,
//!     &square2,
//!     BooleanMethod::WeilerAtherton,
//!     BooleanOp::Intersection,
//! );
//! assert_eq!(intersection.len(), 1); // One intersection polygon
//! ```

mod boolean;
mod core;
mod overlay;
mod triangulate;
mod validate;
mod weiler;

pub use boolean::{
    boolean_op, boolean_op_with, polygon_intersection, polygon_union, BooleanMethod, BooleanOp,
};
pub use core::{area_sign, point_in_polygon, polygon_area, Polygon, Winding};
pub use overlay::path_delegation;
pub use triangulate::{triangulate, triangulate_with, Triangle, Triangulation};
pub use validate::{is_simple_polygon, validate_polygon, validate_polygon_with};
pub use weiler::{weiler_atherton, weiler_atherton_with};
