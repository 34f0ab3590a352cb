//! Core polygon type, shoelace area and ray-casting containment.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Rotational direction of a vertex sequence as seen on screen.
///
/// Screen coordinates grow `y` downward, so a positive shoelace sum is
/// clockwise on screen and a negative one counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive shoelace sum.
    Clockwise,
    /// Negative shoelace sum.
    CounterClockwise,
    /// Zero shoelace sum (collinear or fewer than three vertices).
    Degenerate,
}

/// A polygon as an ordered vertex list.
///
/// The boundary is implicitly closed: the last vertex connects back to the
/// first. Nothing is validated on construction; see
/// [`is_simple_polygon`](super::is_simple_polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// Vertices in traversal order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon with no vertices.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Appends a vertex.
    #[inline]
    pub fn push(&mut self, p: Point2<F>) {
        self.vertices.push(p);
    }

    /// Iterates over the boundary edges, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace sum (twice the signed area). See [`area_sign`].
    pub fn area_sign(&self) -> F {
        area_sign(&self.vertices)
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        polygon_area(&self.vertices)
    }

    /// Winding of the vertex order.
    pub fn winding(&self) -> Winding {
        let sum = self.area_sign();
        if sum > F::zero() {
            Winding::Clockwise
        } else if sum < F::zero() {
            Winding::CounterClockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Returns a copy whose vertices run in the requested direction.
    ///
    /// Degenerate polygons are returned unchanged.
    pub fn oriented(&self, winding: Winding) -> Self {
        let current = self.winding();
        if current != Winding::Degenerate && winding != Winding::Degenerate && current != winding
        {
            self.reversed()
        } else {
            self.clone()
        }
    }

    /// Returns a polygon with reversed vertex order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Ray-casting containment test. See [`point_in_polygon`].
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// True if `a`-`b` (in either direction) is one of the boundary edges.
    ///
    /// Uses exact coordinate matching, so it tells boundary edges apart from
    /// diagonals introduced by triangulation.
    pub fn has_edge(&self, a: Point2<F>, b: Point2<F>) -> bool {
        self.edges()
            .any(|e| (e.start == a && e.end == b) || (e.start == b && e.end == a))
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Shoelace sum `Σ (x_i * y_{i+1} - x_{i+1} * y_i)`, indices wrapping.
///
/// This is twice the signed area. With screen coordinates (`y` down) a
/// positive value means the vertices run clockwise on screen; see
/// [`Winding`].
pub fn area_sign<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    let mut sum = F::zero();

    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        sum = sum + (p1.x * p2.y - p2.x * p1.y);
    }

    sum
}

/// Unsigned polygon area, `|Σ (x_i * y_{i+1} - x_{i+1} * y_i)| / 2`.
///
/// Independent of winding and of which vertex comes first.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    area_sign(vertices).abs() / F::from(2.0).unwrap()
}

/// Tests if a point is inside a polygon by ray casting.
///
/// Casts a horizontal ray to the right of `point` and counts edge crossings.
/// An edge counts only if it spans the point's `y` on a half-open interval
/// and its crossing lies strictly to the right (`point.x < x_cross`), so a
/// ray through a shared vertex is not counted twice.
///
/// Returns false for fewer than 3 vertices. Points on the boundary may go
/// either way.
pub fn point_in_polygon<F: Float>(point: Point2<F>, vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = vertices[i];
        let pj = vertices[j];

        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}
