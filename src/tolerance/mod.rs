//! Epsilon-aware geometric predicates.
//!
//! Every predicate takes its tolerance as an argument. The fixed thresholds
//! used by the high-level entry points live in [`Tolerances`].

mod predicates;

pub use predicates::{
    cross_product, line_segment_intersection, on_segment, orient2d, segments_intersect,
    Orientation, SegmentCrossing,
};

use num_traits::Float;

/// Threshold for determinant and parametric tests in segment intersection.
pub const INTERSECTION_EPS: f64 = 1e-9;

/// Threshold for collinearity and point-in-triangle containment tests.
pub const CONTAINMENT_EPS: f64 = 1e-10;

/// Fixed tolerances shared by the algorithms.
///
/// These are absolute, not relative. Inputs at very large or very small
/// coordinate magnitudes should be rescaled before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<F> {
    /// Determinant cutoff for parallel segments and the margin that keeps
    /// intersection parameters away from segment endpoints.
    pub intersection: F,
    /// Cutoff for collinearity and for the triangle area-sum comparison.
    pub containment: F,
    /// Cross-product cutoff under which two hull candidates are treated as
    /// lying on the same ray from the pivot.
    pub angular: F,
}

impl<F: Float> Default for Tolerances<F> {
    fn default() -> Self {
        Self {
            intersection: F::from(INTERSECTION_EPS).unwrap(),
            containment: F::from(CONTAINMENT_EPS).unwrap(),
            angular: F::from(INTERSECTION_EPS).unwrap(),
        }
    }
}

impl<F: Float> Tolerances<F> {
    /// Sets the intersection tolerance.
    pub fn intersection(mut self, eps: F) -> Self {
        self.intersection = eps;
        self
    }

    /// Sets the containment tolerance.
    pub fn containment(mut self, eps: F) -> Self {
        self.containment = eps;
        self
    }

    /// Sets the angular tie-break tolerance for the angular-sweep hull.
    pub fn angular(mut self, eps: F) -> Self {
        self.angular = eps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances() {
        let tol: Tolerances<f64> = Tolerances::default();
        assert_eq!(tol.intersection, 1e-9);
        assert_eq!(tol.containment, 1e-10);
        assert_eq!(tol.angular, 1e-9);
    }

    #[test]
    fn test_builder() {
        let tol: Tolerances<f32> = Tolerances::default().intersection(1e-5).containment(1e-6);
        assert_eq!(tol.intersection, 1e-5);
        assert_eq!(tol.containment, 1e-6);
    }
}
