//! Property tests over generated point sets and polygons.
//!
//! Most generators round to integers so that orientation tests are exact;
//! the validator is also exercised on unrounded, sub-unit polygons.

use approx::assert_relative_eq;
use polykit::hull::{convex_hull, point_in_convex_hull, HullAlgorithm};
use polykit::polygon::{
    boolean_op, is_simple_polygon, polygon_area, triangulate, validate_polygon, BooleanMethod,
    BooleanOp, Polygon,
};
use polykit::{cross_product, GeometryError, Point2};
use proptest::prelude::*;

fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((-50i32..=50, -50i32..=50), 3..40).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| Point2::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

/// Star-shaped polygon around the origin: one vertex per evenly spaced
/// angle, each at its own radius, rounded to integers.
fn star_polygon() -> impl Strategy<Value = Vec<Point2<f64>>> {
    (3usize..=10)
        .prop_flat_map(|n| prop::collection::vec(20.0f64..100.0, n))
        .prop_map(|radii| {
            let n = radii.len() as f64;
            radii
                .iter()
                .enumerate()
                .map(|(i, &r)| {
                    let theta = std::f64::consts::TAU * i as f64 / n;
                    Point2::new((r * theta.cos()).round(), (r * theta.sin()).round())
                })
                .collect()
        })
}

/// Regular polygon with 4 to 8 vertices, either rounded to integers at
/// radius 20..100 or left unrounded at radius below one.
fn convex_polygon() -> impl Strategy<Value = Vec<Point2<f64>>> {
    let scale = prop_oneof![
        (20.0f64..100.0).prop_map(|r| (r, true)),
        (0.01f64..0.9).prop_map(|r| (r, false)),
    ];
    (4usize..=8, 0.0f64..std::f64::consts::TAU, scale).prop_map(|(n, phase, (radius, round))| {
        (0..n)
            .map(|i| {
                let theta = phase + std::f64::consts::TAU * i as f64 / n as f64;
                let (x, y) = (radius * theta.cos(), radius * theta.sin());
                if round {
                    Point2::new(x.round(), y.round())
                } else {
                    Point2::new(x, y)
                }
            })
            .collect()
    })
}

/// Axis-aligned rectangle with corners on even (or odd) coordinates.
fn rectangle(odd: bool) -> impl Strategy<Value = Vec<Point2<f64>>> {
    let shift = if odd { 1.0 } else { 0.0 };
    (0i32..10, 0i32..10, 1i32..8, 1i32..8).prop_map(move |(x, y, w, h)| {
        let (x0, y0) = (f64::from(2 * x) + shift, f64::from(2 * y) + shift);
        let (x1, y1) = (x0 + f64::from(2 * w), y0 + f64::from(2 * h));
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    })
}

/// No three vertices on a common line.
fn general_position(points: &[Point2<f64>]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if cross_product(points[i], points[j], points[k]) == 0.0 {
                    return false;
                }
            }
        }
    }
    true
}

fn sorted(mut points: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    points.sort_by(|p, q| p.x.partial_cmp(&q.x).unwrap().then(p.y.partial_cmp(&q.y).unwrap()));
    points
}

fn total_area(contours: &[Polygon<f64>]) -> f64 {
    contours.iter().map(Polygon::area).sum()
}

proptest! {
    #[test]
    fn hulls_agree_and_cover_input(points in point_set()) {
        let chain = convex_hull(&points, HullAlgorithm::MonotoneChain);
        let sweep = convex_hull(&points, HullAlgorithm::AngularSweep);
        prop_assert_eq!(sorted(chain.clone()), sorted(sweep));

        prop_assume!(chain.len() >= 3);
        for &p in &points {
            prop_assert!(point_in_convex_hull(&chain, p, 1e-9));
        }
    }

    #[test]
    fn hull_turns_left_everywhere(points in point_set()) {
        let hull = convex_hull(&points, HullAlgorithm::AngularSweep);
        let n = hull.len();
        prop_assume!(n >= 3);
        for i in 0..n {
            prop_assert!(cross_product(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) > 0.0);
        }
    }

    #[test]
    fn area_ignores_rotation_and_direction(vertices in star_polygon(), shift in 0usize..10) {
        let expected = polygon_area(&vertices);

        let mut rotated = vertices.clone();
        rotated.rotate_left(shift % vertices.len());
        prop_assert!((polygon_area(&rotated) - expected).abs() < 1e-9);

        let mut reversed = vertices;
        reversed.reverse();
        prop_assert!((polygon_area(&reversed) - expected).abs() < 1e-9);
    }

    #[test]
    fn star_polygons_are_simple(vertices in star_polygon()) {
        prop_assert!(is_simple_polygon(&Polygon::new(vertices)));
    }

    #[test]
    fn repeated_vertex_rejected(vertices in convex_polygon(), at in 0usize..8) {
        prop_assert!(is_simple_polygon(&Polygon::new(vertices.clone())));

        let i = at % vertices.len();
        let mut repeated = vertices.clone();
        repeated.insert(i + 1, vertices[i]);
        let repeated = Polygon::new(repeated);
        prop_assert!(!is_simple_polygon(&repeated));
        prop_assert_eq!(
            validate_polygon(&repeated),
            Err(GeometryError::DegenerateEdge { index: i })
        );
    }

    #[test]
    fn swapped_neighbours_rejected(vertices in convex_polygon(), at in 0usize..8) {
        // Swapping two neighbours of a convex polygon makes the edges into
        // and out of the pair cross
        let n = vertices.len();
        let i = at % n;
        let mut twisted = vertices;
        twisted.swap(i, (i + 1) % n);
        let twisted = Polygon::new(twisted);
        prop_assert!(!is_simple_polygon(&twisted));
        prop_assert_eq!(
            validate_polygon(&twisted),
            Err(GeometryError::SelfIntersectingPolygon)
        );
    }

    #[test]
    fn triangulation_covers_polygon(vertices in star_polygon(), reverse in any::<bool>()) {
        prop_assume!(general_position(&vertices));
        let mut polygon = Polygon::new(vertices);
        if reverse {
            polygon = polygon.reversed();
        }

        let triangulation = triangulate(&polygon).unwrap();
        prop_assert_eq!(triangulation.len(), polygon.len() - 2);
        assert_relative_eq!(triangulation.area(), polygon.area(), epsilon = 1e-6);
    }

    #[test]
    fn weiler_atherton_matches_clipper(a in rectangle(false), b in rectangle(true)) {
        let a = Polygon::new(a);
        let b = Polygon::new(b);
        for op in [BooleanOp::Intersection, BooleanOp::Union] {
            let oracle = boolean_op(&a, &b, BooleanMethod::PathDelegation, op);
            let weiler = boolean_op(&a, &b, BooleanMethod::WeilerAtherton, op);
            prop_assert!(
                (total_area(&oracle) - total_area(&weiler)).abs() < 1e-6,
                "{:?}: clipper {} vs weiler {}",
                op,
                total_area(&oracle),
                total_area(&weiler)
            );
        }
    }

    #[test]
    fn intersection_never_exceeds_operands(a in rectangle(false), b in rectangle(true)) {
        let a = Polygon::new(a);
        let b = Polygon::new(b);
        let inter = boolean_op(&a, &b, BooleanMethod::WeilerAtherton, BooleanOp::Intersection);
        let union = boolean_op(&a, &b, BooleanMethod::WeilerAtherton, BooleanOp::Union);

        let smaller = a.area().min(b.area());
        prop_assert!(total_area(&inter) <= smaller + 1e-9);
        prop_assert!(
            (total_area(&union) + total_area(&inter) - a.area() - b.area()).abs() < 1e-9
        );
    }
}
