//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A point in the plane.
///
/// Equality is exact coordinate comparison; predicates that need slack take
/// an explicit epsilon. Screen input arrives with `y` growing downward, and
/// nothing here flips it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Lossy conversion to an `f64` pair, the coordinate type of the overlay
    /// backend.
    #[inline]
    pub(crate) fn to_f64_array(self) -> [f64; 2] {
        [
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        ]
    }

    #[inline]
    pub(crate) fn from_f64_array([x, y]: [f64; 2]) -> Self {
        Self {
            x: F::from(x).unwrap_or_else(F::nan),
            y: F::from(y).unwrap_or_else(F::nan),
        }
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::new(F::zero(), F::zero())
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance_squared(a), 25.0);
    }

    #[test]
    fn test_exact_equality() {
        let a: Point2<f64> = Point2::new(0.1 + 0.2, 0.0);
        let b = Point2::new(0.3, 0.0);
        assert_ne!(a, b);
        assert_eq!(a, Point2::from((0.1 + 0.2, 0.0)));
    }

    #[test]
    fn test_point_minus_point() {
        let v = Point2::new(3.0_f64, 1.0) - Point2::new(1.0, 2.0);
        assert_eq!(v, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_f64_array_roundtrip_f32() {
        let p: Point2<f32> = Point2::new(1.5, -2.0);
        let q: Point2<f32> = Point2::from_f64_array(p.to_f64_array());
        assert_eq!(p, q);
    }
}
