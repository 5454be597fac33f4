// MIT/Apache2 License

use crate::PathData;
use lyon_geom::{Point, Rect};

// 4/3 * (sqrt(2) - 1), the control-point offset that makes a cubic
// bezier hug a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Something that accumulates path-drawing primitives; the target that
/// geometry is lowered into.
///
/// `PathSink`s are usually adapters over a platform path object (a
/// CoreGraphics `CGPath`, a GDI path, a `lyon_path` builder) that
/// translate each call into the native equivalent. The lowering engine
/// drives a sink through this trait and never looks at what is behind it.
///
/// Implementors provide the six core operations: `move_to`, `line_to`,
/// `cubic_to`, `quad_to`, `close` and `set_fill_rule`. The batch
/// operations (`add_rect`, `add_ellipse`, `add_lines`, `add_path`) have
/// default implementations in terms of the core six; reimplement them
/// when the native API has a dedicated primitive, which is usually both
/// faster and more faithful to the platform's own geometry.
///
/// Every operation returns [`crate::Result`] so a sink can refuse work it
/// cannot express; the first error aborts the lowering that is driving
/// the sink. Targets without native quadratic curves should return
/// [`NotSupported`](crate::Error::NotSupported) with
/// [`NSOpType::QuadraticCurves`](crate::NSOpType::QuadraticCurves) from
/// `quad_to`, and targets whose paths carry no fill rule may either
/// record the flag elsewhere or refuse it with
/// [`NSOpType::FillRules`](crate::NSOpType::FillRules).
pub trait PathSink {
    /* Core operations */

    /// Begin a new sub-path at `to`.
    fn move_to(&mut self, to: Point<f32>) -> crate::Result;
    /// Add a straight line from the current point to `to`.
    fn line_to(&mut self, to: Point<f32>) -> crate::Result;
    /// Add a cubic bezier from the current point to `to`, guided by two
    /// control points.
    fn cubic_to(&mut self, ctrl1: Point<f32>, ctrl2: Point<f32>, to: Point<f32>)
        -> crate::Result;
    /// Add a quadratic bezier from the current point to `to`.
    fn quad_to(&mut self, ctrl: Point<f32>, to: Point<f32>) -> crate::Result;
    /// Close the current sub-path with a line back to where it began.
    fn close(&mut self) -> crate::Result;
    /// Record whether the path is filled with the nonzero winding rule
    /// (`true`) or the even-odd rule (`false`).
    ///
    /// The lowering engine calls this exactly once per lowering, after
    /// all primitives have been emitted.
    fn set_fill_rule(&mut self, nonzero: bool) -> crate::Result;

    /* Batch operations */

    /// Add `rect` as its own closed sub-path.
    ///
    /// The default traces the corners clockwise (in y-down coordinates)
    /// starting from the rectangle's origin.
    #[inline]
    fn add_rect(&mut self, rect: Rect<f32>) -> crate::Result {
        let (x, y) = (rect.origin.x, rect.origin.y);
        let (width, height) = (rect.size.width, rect.size.height);
        self.move_to(Point::new(x, y))?;
        self.line_to(Point::new(x + width, y))?;
        self.line_to(Point::new(x + width, y + height))?;
        self.line_to(Point::new(x, y + height))?;
        self.close()
    }

    /// Add the ellipse inscribed in `rect` as its own closed sub-path.
    ///
    /// The default approximates it with four cubic beziers, starting at
    /// the rightmost point and sweeping clockwise.
    #[inline]
    fn add_ellipse(&mut self, rect: Rect<f32>) -> crate::Result {
        let rx = rect.size.width / 2.0;
        let ry = rect.size.height / 2.0;
        let cx = rect.origin.x + rx;
        let cy = rect.origin.y + ry;
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.move_to(Point::new(cx + rx, cy))?;
        self.cubic_to(
            Point::new(cx + rx, cy + ky),
            Point::new(cx + kx, cy + ry),
            Point::new(cx, cy + ry),
        )?;
        self.cubic_to(
            Point::new(cx - kx, cy + ry),
            Point::new(cx - rx, cy + ky),
            Point::new(cx - rx, cy),
        )?;
        self.cubic_to(
            Point::new(cx - rx, cy - ky),
            Point::new(cx - kx, cy - ry),
            Point::new(cx, cy - ry),
        )?;
        self.cubic_to(
            Point::new(cx + kx, cy - ry),
            Point::new(cx + rx, cy - ky),
            Point::new(cx + rx, cy),
        )?;
        self.close()
    }

    /// Add a line to each point in order.
    ///
    /// This is preferred to calling `line_to()` in a loop if you have
    /// several points, since implementations can sometimes batch them
    /// into one native call. An empty slice is a no-op.
    #[inline]
    fn add_lines(&mut self, points: &[Point<f32>]) -> crate::Result {
        for point in points {
            self.line_to(*point)?;
        }
        Ok(())
    }

    /// Append every primitive of `path`, in order.
    ///
    /// Only the commands are appended; `path`'s fill rule is not carried
    /// over.
    #[inline]
    fn add_path(&mut self, path: &PathData) -> crate::Result {
        path.replay(self)
    }
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    #[inline]
    fn move_to(&mut self, to: Point<f32>) -> crate::Result {
        (**self).move_to(to)
    }
    #[inline]
    fn line_to(&mut self, to: Point<f32>) -> crate::Result {
        (**self).line_to(to)
    }
    #[inline]
    fn cubic_to(
        &mut self,
        ctrl1: Point<f32>,
        ctrl2: Point<f32>,
        to: Point<f32>,
    ) -> crate::Result {
        (**self).cubic_to(ctrl1, ctrl2, to)
    }
    #[inline]
    fn quad_to(&mut self, ctrl: Point<f32>, to: Point<f32>) -> crate::Result {
        (**self).quad_to(ctrl, to)
    }
    #[inline]
    fn close(&mut self) -> crate::Result {
        (**self).close()
    }
    #[inline]
    fn set_fill_rule(&mut self, nonzero: bool) -> crate::Result {
        (**self).set_fill_rule(nonzero)
    }
    #[inline]
    fn add_rect(&mut self, rect: Rect<f32>) -> crate::Result {
        (**self).add_rect(rect)
    }
    #[inline]
    fn add_ellipse(&mut self, rect: Rect<f32>) -> crate::Result {
        (**self).add_ellipse(rect)
    }
    #[inline]
    fn add_lines(&mut self, points: &[Point<f32>]) -> crate::Result {
        (**self).add_lines(points)
    }
    #[inline]
    fn add_path(&mut self, path: &PathData) -> crate::Result {
        (**self).add_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathCommand;
    use lyon_geom::{point, size};

    #[test]
    fn test_add_rect_decomposition() {
        let mut data = PathData::new();
        data.add_rect(Rect::new(point(1.0, 2.0), size(3.0, 4.0)))
            .unwrap();
        assert_eq!(
            data.commands(),
            &[
                PathCommand::MoveTo(point(1.0, 2.0)),
                PathCommand::LineTo(point(4.0, 2.0)),
                PathCommand::LineTo(point(4.0, 6.0)),
                PathCommand::LineTo(point(1.0, 6.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_add_ellipse_decomposition() {
        let mut data = PathData::new();
        data.add_ellipse(Rect::new(point(-5.0, -3.0), size(10.0, 6.0)))
            .unwrap();

        let commands = data.commands();
        assert_eq!(commands.len(), 6);
        assert_eq!(commands[0], PathCommand::MoveTo(point(5.0, 0.0)));
        assert_eq!(commands[5], PathCommand::Close);

        // the four curves land on the ellipse's cardinal points
        let cardinals = [
            point(0.0, 3.0),
            point(-5.0, 0.0),
            point(0.0, -3.0),
            point(5.0, 0.0),
        ];
        for (command, cardinal) in commands[1..5].iter().zip(cardinals.iter()) {
            match command {
                PathCommand::CurveTo(_, _, to) => assert_eq!(to, cardinal),
                command => panic!("expected a curve, got {:?}", command),
            }
        }
    }

    #[test]
    fn test_add_lines_empty() {
        let mut data = PathData::new();
        data.add_lines(&[]).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_mut_forwarding() {
        fn emit<S: PathSink>(mut sink: S) -> crate::Result {
            sink.move_to(point(0.0, 0.0))?;
            sink.line_to(point(1.0, 1.0))
        }

        let mut data = PathData::new();
        emit(&mut data).unwrap();
        assert_eq!(data.len(), 2);
    }
}
