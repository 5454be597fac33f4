// MIT/Apache2 License

use crate::{
    flatten_arc, FillRule, Geometry, PathData, PathFigure, PathSegment, PathSink,
};
use lyon_geom::{Point, Transform};

/// Flatness used when arcs are reduced to polylines, in geometry units.
const ARC_TOLERANCE: f32 = 1.0;

impl Geometry {
    /// Lower this geometry into `sink` as a sequence of path-drawing
    /// primitives.
    ///
    /// Every coordinate is mapped through `transform` before emission
    /// (`None` is the identity). After the walk the sink's fill rule is
    /// set from the tree's top-level [`FillRule`], which is also
    /// returned: a group's or path's own rule, [`FillRule::EvenOdd`] for
    /// the primitive shapes. Nested rules do not escape their parent;
    /// the outermost one wins.
    ///
    /// The walk is aborted by the first sink error; nothing is rolled
    /// back, so the sink's contents are unspecified after a failure.
    pub fn lower_into<S: PathSink + ?Sized>(
        &self,
        transform: Option<&Transform<f32>>,
        sink: &mut S,
    ) -> crate::Result<FillRule> {
        let identity = Transform::identity();
        let transform = transform.unwrap_or(&identity);
        let fill_rule = lower_geometry(self, transform, sink)?;
        sink.set_fill_rule(fill_rule.is_nonzero())?;
        Ok(fill_rule)
    }

    /// Lower this geometry into a fresh [`PathData`].
    #[inline]
    pub fn to_path_data(&self, transform: Option<&Transform<f32>>) -> crate::Result<PathData> {
        let mut data = PathData::new();
        self.lower_into(transform, &mut data)?;
        Ok(data)
    }
}

fn lower_geometry<S: PathSink + ?Sized>(
    geometry: &Geometry,
    transform: &Transform<f32>,
    sink: &mut S,
) -> crate::Result<FillRule> {
    match geometry {
        Geometry::Line(line) => {
            sink.move_to(transform.transform_point(line.start))?;
            sink.line_to(transform.transform_point(line.end))?;
            Ok(FillRule::EvenOdd)
        }
        Geometry::Rectangle(rectangle) => {
            if let Some(rect) = rectangle.rect {
                sink.add_rect(transform.outer_transformed_rect(&rect))?;
            }
            Ok(FillRule::EvenOdd)
        }
        Geometry::Ellipse(ellipse) => {
            sink.add_ellipse(transform.outer_transformed_rect(&ellipse.bounds()))?;
            Ok(FillRule::EvenOdd)
        }
        Geometry::Group(group) => {
            // children keep the original transform; their fill rules
            // stay inside the group
            for child in &group.children {
                lower_geometry(child, transform, sink)?;
            }
            Ok(group.fill_rule)
        }
        Geometry::Path(path) => {
            for figure in &path.figures {
                lower_figure(figure, transform, sink)?;
            }
            Ok(path.fill_rule)
        }
    }
}

fn lower_figure<S: PathSink + ?Sized>(
    figure: &PathFigure,
    transform: &Transform<f32>,
    sink: &mut S,
) -> crate::Result {
    sink.move_to(transform.transform_point(figure.start_point))?;

    // segments are interpreted in model space; the transform applies at
    // emission only
    let mut last_point = figure.start_point;
    for segment in &figure.segments {
        last_point = lower_segment(segment, last_point, transform, sink)?;
    }

    if figure.is_closed {
        sink.close()?;
    }
    Ok(())
}

/// Emit one segment, returning the figure's new current point.
fn lower_segment<S: PathSink + ?Sized>(
    segment: &PathSegment,
    last_point: Point<f32>,
    transform: &Transform<f32>,
    sink: &mut S,
) -> crate::Result<Point<f32>> {
    match segment {
        PathSegment::Line { to } => {
            sink.line_to(transform.transform_point(*to))?;
            Ok(*to)
        }
        PathSegment::PolyLine { points } => {
            let transformed: Vec<Point<f32>> = points
                .iter()
                .map(|point| transform.transform_point(*point))
                .collect();
            sink.add_lines(&transformed)?;
            Ok(points.last().copied().unwrap_or(last_point))
        }
        PathSegment::Bezier { ctrl1, ctrl2, to } => {
            sink.cubic_to(
                transform.transform_point(*ctrl1),
                transform.transform_point(*ctrl2),
                transform.transform_point(*to),
            )?;
            Ok(*to)
        }
        PathSegment::PolyBezier { points } => {
            for chunk in points.chunks_exact(3) {
                sink.cubic_to(
                    transform.transform_point(chunk[0]),
                    transform.transform_point(chunk[1]),
                    transform.transform_point(chunk[2]),
                )?;
            }
            if points.len() % 3 != 0 {
                log::warn!(
                    "poly-bezier list of {} points leaves {} undrawn",
                    points.len(),
                    points.len() % 3
                );
            }
            // the current point tracks the raw list, drawn or not
            Ok(points.last().copied().unwrap_or(last_point))
        }
        PathSegment::Quadratic { ctrl, to } => {
            sink.quad_to(
                transform.transform_point(*ctrl),
                transform.transform_point(*to),
            )?;
            Ok(*to)
        }
        PathSegment::PolyQuadratic { points } => {
            for chunk in points.chunks_exact(2) {
                sink.quad_to(
                    transform.transform_point(chunk[0]),
                    transform.transform_point(chunk[1]),
                )?;
            }
            if points.len() % 2 != 0 {
                log::warn!(
                    "poly-quadratic list of {} points leaves one undrawn",
                    points.len()
                );
            }
            Ok(points.last().copied().unwrap_or(last_point))
        }
        PathSegment::Arc {
            to,
            radii,
            x_rotation,
            large_arc,
            sweep,
        } => {
            let mut points = flatten_arc(
                last_point,
                *to,
                *radii,
                *x_rotation,
                *large_arc,
                *sweep,
                ARC_TOLERANCE,
            );
            // the next segment continues from the model-space endpoint
            let end = points.last().copied();
            for point in &mut points {
                *point = transform.transform_point(*point);
            }
            sink.add_lines(&points)?;
            match end {
                Some(end) => Ok(end),
                None => {
                    log::debug!("degenerate arc flattened to nothing");
                    Ok(Point::zero())
                }
            }
        }
    }
}
