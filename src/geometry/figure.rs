// MIT/Apache2 License

use lyon_geom::{Angle, Point, Vector};

/// One independent sub-path within a [`PathGeometry`](super::PathGeometry).
///
/// A figure starts at `start_point` and threads a current point through its
/// segments; each segment begins where the previous one ended. `is_closed`
/// controls whether a closing line back to the start is emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFigure {
    pub start_point: Point<f32>,
    pub segments: Vec<PathSegment>,
    pub is_closed: bool,
}

impl PathFigure {
    /// Create an open figure with no segments yet.
    #[inline]
    pub fn new(start_point: Point<f32>) -> PathFigure {
        PathFigure {
            start_point,
            segments: Vec::new(),
            is_closed: false,
        }
    }
}

/// A single drawing instruction within a figure.
///
/// The `Poly*` variants carry a flat point list that is consumed in fixed
/// chunks: one point per line, three per cubic, two per quadratic. Trailing
/// points that do not fill a whole chunk are not drawn, but they still move
/// the figure's current point (see [`lower_into`](crate::Geometry::lower_into)).
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// A straight line to `to`.
    Line { to: Point<f32> },
    /// A straight line through every point in order.
    PolyLine { points: Vec<Point<f32>> },
    /// A cubic bezier with two control points.
    Bezier {
        ctrl1: Point<f32>,
        ctrl2: Point<f32>,
        to: Point<f32>,
    },
    /// Cubic beziers taken from `points` in triples of
    /// (control 1, control 2, endpoint).
    PolyBezier { points: Vec<Point<f32>> },
    /// A quadratic bezier with one control point.
    Quadratic { ctrl: Point<f32>, to: Point<f32> },
    /// Quadratic beziers taken from `points` in pairs of
    /// (control, endpoint).
    PolyQuadratic { points: Vec<Point<f32>> },
    /// An SVG-style elliptical arc from the current point to `to`.
    Arc {
        to: Point<f32>,
        radii: Vector<f32>,
        x_rotation: Angle<f32>,
        large_arc: bool,
        sweep: SweepDirection,
    },
}

/// The direction an arc is swept in.
///
/// In the y-down coordinate system used here, `Clockwise` is the
/// positive-angle direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SweepDirection {
    Clockwise,
    CounterClockwise,
}

impl Default for SweepDirection {
    #[inline]
    fn default() -> SweepDirection {
        SweepDirection::CounterClockwise
    }
}
