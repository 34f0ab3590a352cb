//! Boolean operations delegated to the `i_overlay` clipping library.
//!
//! This is the reference engine: [`weiler_atherton`](super::weiler_atherton)
//! is checked against it. Coordinates pass through `f64`.
//!
//! Results are flattened into one contour per boundary. A region with a hole
//! comes back as its outer contour followed by the hole contour; render them
//! with a nonzero fill rule.

use super::boolean::BooleanOp;
use super::core::Polygon;
use crate::primitives::Point2;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use num_traits::Float;
use tracing::debug;

/// Intersection or union of `a` and `b` computed by `i_overlay`.
///
/// Operands with fewer than three vertices contribute no area.
///
/// # Example
///
/// ```
/// use polykit::polygon::{path_delegation, BooleanOp, Polygon};
/// use polykit::Point2;
///
/// let a: Polygon<f64> = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// let b = Polygon::new(vec![
///     Point2::new(2.0, 2.0),
///     Point2::new(6.0, 2.0),
///     Point2::new(6.0, 6.0),
///     Point2::new(2.0, 6.0),
/// ]);
///
/// let overlap = path_delegation(&a, &b, BooleanOp::Intersection);
/// assert_eq!(overlap.len(), 1);
/// assert!((overlap[0].area() - 4.0).abs() < 1e-6);
/// ```
pub fn path_delegation<F: Float>(a: &Polygon<F>, b: &Polygon<F>, op: BooleanOp) -> Vec<Polygon<F>> {
    if a.len() < 3 || b.len() < 3 {
        return match op {
            BooleanOp::Intersection => Vec::new(),
            BooleanOp::Union => [a, b]
                .into_iter()
                .filter(|p| p.len() >= 3)
                .cloned()
                .collect(),
        };
    }

    let subject = to_path(a);
    let clip = to_path(b);

    let rule = match op {
        BooleanOp::Intersection => OverlayRule::Intersect,
        BooleanOp::Union => OverlayRule::Union,
    };

    let shapes = subject.overlay(&[clip], rule, FillRule::NonZero);

    let mut result = Vec::new();
    for shape in shapes {
        for contour in shape {
            if contour.len() >= 3 {
                result.push(Polygon::new(
                    contour.into_iter().map(Point2::from_f64_array).collect(),
                ));
            }
        }
    }

    debug!(
        ?op,
        a_vertices = a.len(),
        b_vertices = b.len(),
        contours = result.len(),
        "path delegation"
    );
    result
}

fn to_path<F: Float>(polygon: &Polygon<F>) -> Vec<[f64; 2]> {
    polygon.vertices.iter().map(|p| p.to_f64_array()).collect()
}
