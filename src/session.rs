//! Event-driven interaction state.
//!
//! [`Session`] holds the point containers a drawing front end fills from
//! mouse input and runs the geometry when a drawing is finished. A shell
//! forwards its events and reads containers and results back for display:
//!
//! | event              | call                          |
//! |--------------------|-------------------------------|
//! | menu: hull         | [`Session::begin_hull`]       |
//! | menu: polygon task | [`Session::begin_polygon`]    |
//! | menu: boolean      | [`Session::begin_boolean`]    |
//! | left click         | [`Session::add_point`]        |
//! | right click        | [`Session::finish`]           |
//! | menu: run boolean  | [`Session::boolean`]          |
//! | menu: clear        | [`Session::clear`]            |
//!
//! # Example
//!
//! ```
//! use polykit::polygon::{BooleanMethod, BooleanOp};
//! use polykit::session::{Mode, Session};
//! use polykit::Point2;
//!
//! let mut session: Session<f64> = Session::new();
//! session.begin_boolean();
//! for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)] {
//!     session.add_point(Point2::new(x, y));
//! }
//! session.finish().unwrap();
//! assert_eq!(session.mode(), Mode::DrawingPolygonB);
//!
//! for (x, y) in [(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)] {
//!     session.add_point(Point2::new(x, y));
//! }
//! session.finish().unwrap();
//! assert!(session.operands_ready());
//!
//! let union = session
//!     .boolean(BooleanMethod::WeilerAtherton, BooleanOp::Union)
//!     .unwrap();
//! assert!((union[0].area() - 28.0).abs() < 1e-9);
//! ```

use crate::error::{GeometryError, Result};
use crate::hull::{angular_sweep_with, monotone_chain, HullAlgorithm};
use crate::polygon::{
    boolean_op_with, triangulate_with, validate_polygon_with, BooleanMethod, BooleanOp, Polygon,
    Triangulation,
};
use crate::primitives::Point2;
use crate::tolerance::Tolerances;
use num_traits::Float;
use tracing::debug;

/// What a single polygon is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonTask {
    /// Ear-clipping triangulation.
    Triangulate,
    /// Shoelace area.
    Area,
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Nothing being collected.
    #[default]
    Idle,
    /// Clicks add hull input points.
    CollectingHullPoints(HullAlgorithm),
    /// Clicks add vertices of a single polygon.
    DrawingPolygon(PolygonTask),
    /// Clicks add vertices of the first boolean operand.
    DrawingPolygonA,
    /// Clicks add vertices of the second boolean operand.
    DrawingPolygonB,
}

/// The latest computed result.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<F> {
    /// Convex hull vertices.
    Hull(Vec<Point2<F>>),
    /// Triangles of the drawn polygon.
    Triangulation(Triangulation<F>),
    /// Area of the drawn polygon.
    Area(F),
    /// Contours of a boolean operation.
    Boolean {
        /// Engine that produced the contours.
        method: BooleanMethod,
        /// Intersection or union.
        op: BooleanOp,
        /// Result boundaries, holes included.
        contours: Vec<Polygon<F>>,
    },
}

/// Point containers plus the mode that decides where clicks go.
#[derive(Debug, Clone)]
pub struct Session<F> {
    mode: Mode,
    points: Vec<Point2<F>>,
    polygon: Polygon<F>,
    polygon_a: Polygon<F>,
    polygon_b: Polygon<F>,
    operands_ready: bool,
    outcome: Option<Outcome<F>>,
    tolerances: Tolerances<F>,
}

impl<F: Float> Default for Session<F> {
    fn default() -> Self {
        Self::with_tolerances(Tolerances::default())
    }
}

impl<F: Float> Session<F> {
    /// An idle session with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// An idle session using `tolerances` for every computation.
    pub fn with_tolerances(tolerances: Tolerances<F>) -> Self {
        Self {
            mode: Mode::Idle,
            points: Vec::new(),
            polygon: Polygon::empty(),
            polygon_a: Polygon::empty(),
            polygon_b: Polygon::empty(),
            operands_ready: false,
            outcome: None,
            tolerances,
        }
    }

    /// Current interaction state.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Hull input points collected so far.
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// The single polygon being drawn.
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    /// First boolean operand.
    pub fn polygon_a(&self) -> &Polygon<F> {
        &self.polygon_a
    }

    /// Second boolean operand.
    pub fn polygon_b(&self) -> &Polygon<F> {
        &self.polygon_b
    }

    /// True once both boolean operands are drawn and valid.
    pub fn operands_ready(&self) -> bool {
        self.operands_ready
    }

    /// Result of the last computation, if any.
    pub fn outcome(&self) -> Option<&Outcome<F>> {
        self.outcome.as_ref()
    }

    /// Clears everything and starts collecting hull points.
    pub fn begin_hull(&mut self, algorithm: HullAlgorithm) {
        self.enter(Mode::CollectingHullPoints(algorithm));
    }

    /// Clears everything and starts drawing a polygon for `task`.
    pub fn begin_polygon(&mut self, task: PolygonTask) {
        self.enter(Mode::DrawingPolygon(task));
    }

    /// Clears everything and starts drawing boolean operand A.
    pub fn begin_boolean(&mut self) {
        self.enter(Mode::DrawingPolygonA);
    }

    /// Adds a point to the container of the current mode.
    ///
    /// Returns false, ignoring the point, when idle.
    pub fn add_point(&mut self, p: Point2<F>) -> bool {
        match self.mode {
            Mode::Idle => return false,
            Mode::CollectingHullPoints(_) => self.points.push(p),
            Mode::DrawingPolygon(_) => self.polygon.push(p),
            Mode::DrawingPolygonA => self.polygon_a.push(p),
            Mode::DrawingPolygonB => self.polygon_b.push(p),
        }
        true
    }

    /// Completes the current drawing.
    ///
    /// - Hull points: computes the hull and goes idle.
    /// - Single polygon: validates it, runs the task and goes idle. An
    ///   invalid polygon is reported and kept for editing.
    /// - Operand A: validates it and moves on to operand B.
    /// - Operand B: validates it, marks the operands ready and goes idle.
    ///
    /// An invalid operand clears the whole session. Fewer than three points
    /// or vertices is reported without changing anything. Idle is a no-op.
    pub fn finish(&mut self) -> Result<()> {
        match self.mode {
            Mode::Idle => Ok(()),
            Mode::CollectingHullPoints(algorithm) => {
                require_three(self.points.len())?;
                let hull = match algorithm {
                    HullAlgorithm::MonotoneChain => monotone_chain(&self.points),
                    HullAlgorithm::AngularSweep => {
                        angular_sweep_with(&self.points, self.tolerances.angular)
                    }
                };
                debug!(?algorithm, points = self.points.len(), hull = hull.len(), "hull finished");
                self.outcome = Some(Outcome::Hull(hull));
                self.mode = Mode::Idle;
                Ok(())
            }
            Mode::DrawingPolygon(task) => {
                require_three(self.polygon.len())?;
                validate_polygon_with(&self.polygon, &self.tolerances)?;
                let outcome = match task {
                    PolygonTask::Triangulate => Outcome::Triangulation(triangulate_with(
                        &self.polygon,
                        &self.tolerances,
                    )?),
                    PolygonTask::Area => Outcome::Area(self.polygon.area()),
                };
                self.outcome = Some(outcome);
                self.mode = Mode::Idle;
                Ok(())
            }
            Mode::DrawingPolygonA => {
                require_three(self.polygon_a.len())?;
                if let Err(err) = validate_polygon_with(&self.polygon_a, &self.tolerances) {
                    self.clear();
                    return Err(err);
                }
                self.mode = Mode::DrawingPolygonB;
                Ok(())
            }
            Mode::DrawingPolygonB => {
                require_three(self.polygon_b.len())?;
                if let Err(err) = validate_polygon_with(&self.polygon_b, &self.tolerances) {
                    self.clear();
                    return Err(err);
                }
                self.operands_ready = true;
                self.mode = Mode::Idle;
                debug!("boolean operands ready");
                Ok(())
            }
        }
    }

    /// Runs a boolean operation on the drawn operands.
    ///
    /// The result replaces any previous outcome.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InsufficientVertices`] unless both operands have been
    /// finished.
    pub fn boolean(&mut self, method: BooleanMethod, op: BooleanOp) -> Result<Vec<Polygon<F>>> {
        if !self.operands_ready {
            return Err(GeometryError::InsufficientVertices {
                required: 3,
                found: self.polygon_a.len().min(self.polygon_b.len()),
            });
        }

        let contours = boolean_op_with(
            &self.polygon_a,
            &self.polygon_b,
            method,
            op,
            &self.tolerances,
        );
        self.outcome = Some(Outcome::Boolean {
            method,
            op,
            contours: contours.clone(),
        });
        Ok(contours)
    }

    /// Drops every container and result and goes idle.
    pub fn clear(&mut self) {
        self.mode = Mode::Idle;
        self.points.clear();
        self.polygon = Polygon::empty();
        self.polygon_a = Polygon::empty();
        self.polygon_b = Polygon::empty();
        self.operands_ready = false;
        self.outcome = None;
    }

    fn enter(&mut self, mode: Mode) {
        self.clear();
        self.mode = mode;
        debug!(?mode, "mode changed");
    }
}

fn require_three(found: usize) -> Result<()> {
    if found < 3 {
        Err(GeometryError::InsufficientVertices { required: 3, found })
    } else {
        Ok(())
    }
}
