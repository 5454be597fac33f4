// MIT/Apache2 License

use crate::PathSink;
use lyon_geom::Point;
use tinyvec::TinyVec;

/// One recorded path-drawing primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    /// Begin a new sub-path at the point.
    MoveTo(Point<f32>),
    /// A straight line to the point.
    LineTo(Point<f32>),
    /// A quadratic bezier: control point, then endpoint.
    QuadTo(Point<f32>, Point<f32>),
    /// A cubic bezier: two control points, then endpoint.
    CurveTo(Point<f32>, Point<f32>, Point<f32>),
    /// Close the current sub-path.
    Close,
}

// TinyVec array elements need a Default.
impl Default for PathCommand {
    #[inline]
    fn default() -> PathCommand {
        PathCommand::Close
    }
}

/// An owned, inspectable lowering result: the primitive sequence plus the
/// fill-rule flag.
///
/// `PathData` is the crate's stand-in for a platform path object. It
/// implements [`PathSink`], so it can be the direct target of
/// [`Geometry::lower_into`](crate::Geometry::lower_into) (or the
/// [`to_path_data`](crate::Geometry::to_path_data) shorthand), and what it
/// records can be [`replay`](PathData::replay)ed into any other sink
/// later. Short paths live inline; longer ones spill to the heap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: TinyVec<[PathCommand; 32]>,
    nonzero_fill_rule: bool,
}

impl PathData {
    /// Create an empty path with the even-odd fill rule.
    #[inline]
    pub fn new() -> PathData {
        PathData::default()
    }

    /// The recorded primitives, in emission order.
    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The number of recorded primitives.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the path is filled with the nonzero winding rule.
    #[inline]
    pub fn is_nonzero_fill_rule(&self) -> bool {
        self.nonzero_fill_rule
    }

    /// Iterate over the recorded primitives.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// Re-emit every recorded primitive into `sink`, in order.
    ///
    /// The fill-rule flag is not replayed; it belongs to this path, not
    /// to the primitives.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) -> crate::Result {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) => sink.move_to(to)?,
                PathCommand::LineTo(to) => sink.line_to(to)?,
                PathCommand::QuadTo(ctrl, to) => sink.quad_to(ctrl, to)?,
                PathCommand::CurveTo(ctrl1, ctrl2, to) => sink.cubic_to(ctrl1, ctrl2, to)?,
                PathCommand::Close => sink.close()?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PathData {
    type Item = PathCommand;
    type IntoIter = <TinyVec<[PathCommand; 32]> as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl PathSink for PathData {
    #[inline]
    fn move_to(&mut self, to: Point<f32>) -> crate::Result {
        self.commands.push(PathCommand::MoveTo(to));
        Ok(())
    }
    #[inline]
    fn line_to(&mut self, to: Point<f32>) -> crate::Result {
        self.commands.push(PathCommand::LineTo(to));
        Ok(())
    }
    #[inline]
    fn cubic_to(
        &mut self,
        ctrl1: Point<f32>,
        ctrl2: Point<f32>,
        to: Point<f32>,
    ) -> crate::Result {
        self.commands.push(PathCommand::CurveTo(ctrl1, ctrl2, to));
        Ok(())
    }
    #[inline]
    fn quad_to(&mut self, ctrl: Point<f32>, to: Point<f32>) -> crate::Result {
        self.commands.push(PathCommand::QuadTo(ctrl, to));
        Ok(())
    }
    #[inline]
    fn close(&mut self) -> crate::Result {
        self.commands.push(PathCommand::Close);
        Ok(())
    }
    #[inline]
    fn set_fill_rule(&mut self, nonzero: bool) -> crate::Result {
        self.nonzero_fill_rule = nonzero;
        Ok(())
    }
    // Structural concatenation without going through replay.
    #[inline]
    fn add_path(&mut self, path: &PathData) -> crate::Result {
        self.commands.extend_from_slice(path.commands());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon_geom::point;

    #[test]
    fn test_record_and_replay() {
        let mut data = PathData::new();
        data.move_to(point(0.0, 0.0)).unwrap();
        data.line_to(point(4.0, 0.0)).unwrap();
        data.quad_to(point(5.0, 1.0), point(4.0, 2.0)).unwrap();
        data.cubic_to(point(3.0, 3.0), point(1.0, 3.0), point(0.0, 2.0))
            .unwrap();
        data.close().unwrap();
        data.set_fill_rule(true).unwrap();

        assert_eq!(data.len(), 5);
        assert!(data.is_nonzero_fill_rule());

        let mut copy = PathData::new();
        data.replay(&mut copy).unwrap();
        assert_eq!(copy.commands(), data.commands());

        // the fill rule stays with the original
        assert!(!copy.is_nonzero_fill_rule());
    }

    #[test]
    fn test_add_path_concatenates() {
        let mut left = PathData::new();
        left.move_to(point(0.0, 0.0)).unwrap();
        left.line_to(point(1.0, 0.0)).unwrap();

        let mut right = PathData::new();
        right.move_to(point(2.0, 2.0)).unwrap();
        right.close().unwrap();
        right.set_fill_rule(true).unwrap();

        left.add_path(&right).unwrap();
        assert_eq!(
            left.commands(),
            &[
                PathCommand::MoveTo(point(0.0, 0.0)),
                PathCommand::LineTo(point(1.0, 0.0)),
                PathCommand::MoveTo(point(2.0, 2.0)),
                PathCommand::Close,
            ]
        );
        assert!(!left.is_nonzero_fill_rule());
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut data = PathData::new();
        data.move_to(point(0.0, 0.0)).unwrap();
        for i in 1..40 {
            data.line_to(point(i as f32, 0.0)).unwrap();
        }

        assert_eq!(data.len(), 40);
        assert_eq!(
            data.commands().last(),
            Some(&PathCommand::LineTo(point(39.0, 0.0)))
        );
    }
}
