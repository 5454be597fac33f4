// MIT/Apache2 License

//! A [`PathSink`] backend that assembles a [`lyon_path::Path`].

use crate::PathSink;
use lyon_geom::Point;
use lyon_path::{builder::WithSvg, path::Builder, Path};

/// Builds a [`lyon_path::Path`] from lowered geometry.
///
/// lyon's plain builder insists on explicit sub-path begin/end calls, so
/// this wraps the SVG-style adapter, whose `move_to`/`close` semantics
/// line up with [`PathSink`]'s one to one. lyon paths carry no fill
/// rule; the flag set by the lowering is kept alongside and read back
/// with [`is_nonzero_fill_rule`](LyonPathSink::is_nonzero_fill_rule).
pub struct LyonPathSink {
    builder: WithSvg<Builder>,
    nonzero_fill_rule: bool,
}

impl LyonPathSink {
    /// Create a sink with an empty path and the even-odd fill rule.
    #[inline]
    pub fn new() -> LyonPathSink {
        LyonPathSink {
            builder: Path::builder().with_svg(),
            nonzero_fill_rule: false,
        }
    }

    /// Whether the lowered geometry asked for the nonzero winding rule.
    #[inline]
    pub fn is_nonzero_fill_rule(&self) -> bool {
        self.nonzero_fill_rule
    }

    /// Finish and return the built path.
    #[inline]
    pub fn build(self) -> Path {
        self.builder.build()
    }
}

impl Default for LyonPathSink {
    #[inline]
    fn default() -> LyonPathSink {
        LyonPathSink::new()
    }
}

impl PathSink for LyonPathSink {
    #[inline]
    fn move_to(&mut self, to: Point<f32>) -> crate::Result {
        self.builder.move_to(to);
        Ok(())
    }
    #[inline]
    fn line_to(&mut self, to: Point<f32>) -> crate::Result {
        self.builder.line_to(to);
        Ok(())
    }
    #[inline]
    fn cubic_to(
        &mut self,
        ctrl1: Point<f32>,
        ctrl2: Point<f32>,
        to: Point<f32>,
    ) -> crate::Result {
        self.builder.cubic_bezier_to(ctrl1, ctrl2, to);
        Ok(())
    }
    #[inline]
    fn quad_to(&mut self, ctrl: Point<f32>, to: Point<f32>) -> crate::Result {
        self.builder.quadratic_bezier_to(ctrl, to);
        Ok(())
    }
    #[inline]
    fn close(&mut self) -> crate::Result {
        self.builder.close();
        Ok(())
    }
    #[inline]
    fn set_fill_rule(&mut self, nonzero: bool) -> crate::Result {
        self.nonzero_fill_rule = nonzero;
        Ok(())
    }
}
