//! Polygon boolean operations.
//!
//! Intersection and union of two polygons, computed either by the
//! `i_overlay` clipper ([`BooleanMethod::PathDelegation`]) or by the
//! hand-written Weiler–Atherton walk ([`BooleanMethod::WeilerAtherton`]).
//! Both return a list of contours; a region with holes spans several
//! contours and is meant to be filled with the nonzero rule.

use super::core::Polygon;
use super::overlay::path_delegation;
use super::weiler::weiler_atherton_with;
use crate::tolerance::Tolerances;
use num_traits::Float;

/// Which set operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Points inside both polygons.
    Intersection,
    /// Points inside either polygon.
    Union,
}

/// Which engine computes the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BooleanMethod {
    /// Delegate to the `i_overlay` clipping library.
    #[default]
    PathDelegation,
    /// Boundary walk with entering/exiting crossings.
    WeilerAtherton,
}

/// Computes `a op b` with the chosen engine.
///
/// Both operands should be simple polygons with at least three vertices.
///
/// # Example
///
/// ```
/// use polykit::polygon::{boolean_op, BooleanMethod, BooleanOp, Polygon};
/// use polykit::Point2;
///
/// let a = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let b = Polygon::new(vec![
///     Point2::new(10.0, 10.0),
///     Point2::new(12.0, 10.0),
///     Point2::new(12.0, 12.0),
///     Point2::new(10.0, 12.0),
/// ]);
///
/// // Disjoint operands: nothing in common, both kept by the union
/// for method in [BooleanMethod::PathDelegation, BooleanMethod::WeilerAtherton] {
///     assert!(boolean_op(&a, &b, method, BooleanOp::Intersection).is_empty());
///     assert_eq!(boolean_op(&a, &b, method, BooleanOp::Union).len(), 2);
/// }
/// ```
pub fn boolean_op<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    method: BooleanMethod,
    op: BooleanOp,
) -> Vec<Polygon<F>> {
    boolean_op_with(a, b, method, op, &Tolerances::default())
}

/// [`boolean_op`] with custom tolerances.
///
/// The tolerances apply to the Weiler–Atherton engine; the clipping library
/// uses its own.
pub fn boolean_op_with<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    method: BooleanMethod,
    op: BooleanOp,
    tol: &Tolerances<F>,
) -> Vec<Polygon<F>> {
    match method {
        BooleanMethod::PathDelegation => path_delegation(a, b, op),
        BooleanMethod::WeilerAtherton => weiler_atherton_with(a, b, op, tol),
    }
}

/// Intersection of two polygons via the clipping library.
pub fn polygon_intersection<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    path_delegation(a, b, BooleanOp::Intersection)
}

/// Union of two polygons via the clipping library.
pub fn polygon_union<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    path_delegation(a, b, BooleanOp::Union)
}
