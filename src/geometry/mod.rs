// MIT/Apache2 License

use lyon_geom::{point, size, Point, Rect, Vector};

mod arc;
mod figure;

pub use arc::*;
pub use figure::*;

/// Determines which regions count as the interior of a self-intersecting
/// or overlapping path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the path an odd number
    /// of times.
    EvenOdd,
    /// A point is inside if the path's windings around it don't sum to
    /// zero.
    Nonzero,
}

impl Default for FillRule {
    #[inline]
    fn default() -> FillRule {
        FillRule::EvenOdd
    }
}

impl FillRule {
    /// Whether this is the nonzero winding rule, in the form native path
    /// objects store it.
    #[inline]
    pub fn is_nonzero(self) -> bool {
        matches!(self, FillRule::Nonzero)
    }
}

/// A resolution-independent description of a 2D shape.
///
/// Geometries are plain data; nothing is emitted until one is lowered into
/// a [`PathSink`](crate::PathSink). The composite variants (`Group`,
/// `Path`) own their children, so a whole scene can be a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line(LineGeometry),
    Rectangle(RectangleGeometry),
    Ellipse(EllipseGeometry),
    Group(GeometryGroup),
    Path(PathGeometry),
}

/// A straight line between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineGeometry {
    pub start: Point<f32>,
    pub end: Point<f32>,
}

/// An axis-aligned rectangle.
///
/// The rectangle is optional; `None` is a legal empty geometry that lowers
/// to nothing.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RectangleGeometry {
    pub rect: Option<Rect<f32>>,
}

/// An ellipse given by its center and half-axis radii.
///
/// Both radii are expected to be non-negative; a zero radius yields a
/// zero-area ellipse rather than an error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipseGeometry {
    pub center: Point<f32>,
    pub radii: Vector<f32>,
}

impl EllipseGeometry {
    /// The axis-aligned bounding rectangle of this ellipse.
    #[inline]
    pub fn bounds(&self) -> Rect<f32> {
        Rect::new(
            point(self.center.x - self.radii.x, self.center.y - self.radii.y),
            size(self.radii.x * 2.0, self.radii.y * 2.0),
        )
    }
}

/// An ordered collection of geometries flattened into one path.
///
/// The group's fill rule applies to the combined path; the children's own
/// fill rules do not survive grouping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryGroup {
    pub children: Vec<Geometry>,
    pub fill_rule: FillRule,
}

/// An arbitrary path built from figures of line, bezier and arc segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    pub figures: Vec<PathFigure>,
    pub fill_rule: FillRule,
}

impl From<LineGeometry> for Geometry {
    #[inline]
    fn from(line: LineGeometry) -> Geometry {
        Geometry::Line(line)
    }
}

impl From<RectangleGeometry> for Geometry {
    #[inline]
    fn from(rectangle: RectangleGeometry) -> Geometry {
        Geometry::Rectangle(rectangle)
    }
}

impl From<EllipseGeometry> for Geometry {
    #[inline]
    fn from(ellipse: EllipseGeometry) -> Geometry {
        Geometry::Ellipse(ellipse)
    }
}

impl From<GeometryGroup> for Geometry {
    #[inline]
    fn from(group: GeometryGroup) -> Geometry {
        Geometry::Group(group)
    }
}

impl From<PathGeometry> for Geometry {
    #[inline]
    fn from(path: PathGeometry) -> Geometry {
        Geometry::Path(path)
    }
}
