// MIT/Apache2 License

#![forbid(unsafe_code)]

//! Lowers abstract vector geometry into native path-drawing primitives.
//!
//! A [`Geometry`] describes a shape (lines, rectangles, ellipses,
//! groups, or full figure-and-segment paths) independently of any
//! rendering API. [`Geometry::lower_into`] walks it under an optional
//! affine transform and emits move/line/curve/close primitives into any
//! [`PathSink`], flattening elliptical arcs to polylines along the way
//! and carrying the path's fill rule to the sink. [`PathData`] records a
//! lowering for inspection or replay; the `lyon` feature (on by default)
//! adds a sink that builds a `lyon_path::Path` directly.

mod error;
mod lower;
mod path_data;
mod sink;

pub mod geometry;

#[cfg(feature = "lyon")]
pub mod lyon;

pub(crate) mod util;

pub use error::*;
pub use geometry::*;
pub use path_data::*;
pub use sink::*;
