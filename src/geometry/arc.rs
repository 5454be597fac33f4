// MIT/Apache2 License

use super::SweepDirection;
use crate::util::approx_eq;
use lyon_geom::{point, Angle, Point, Vector};
use std::f32::consts::PI;

/// Flatten an SVG-style endpoint-parameterized elliptical arc into a
/// polyline.
///
/// The arc runs from `start` to `end` over an ellipse with the given
/// half-axis `radii`, rotated by `x_rotation`. `large_arc` and `sweep`
/// select which of the four candidate arcs through the two endpoints is
/// meant. `tolerance` bounds how far the polyline may deviate from the
/// true arc; smaller values produce more points.
///
/// The returned points do not include `start` (the caller already knows
/// it); the final point is exactly `end`. Degenerate arcs collapse
/// cleanly: coincident endpoints yield an empty polyline, zero radii
/// yield the single point `end` (the arc degenerates to a line), and
/// radii too small to span the chord are scaled up uniformly until they
/// fit. Negative radii are used by absolute value.
pub fn flatten_arc(
    start: Point<f32>,
    end: Point<f32>,
    radii: Vector<f32>,
    x_rotation: Angle<f32>,
    large_arc: bool,
    sweep: SweepDirection,
    tolerance: f32,
) -> Vec<Point<f32>> {
    if approx_eq(start.x, end.x) && approx_eq(start.y, end.y) {
        return Vec::new();
    }

    let rx = radii.x.abs();
    let ry = radii.y.abs();
    if rx * rx < f32::EPSILON || ry * ry < f32::EPSILON {
        return vec![end];
    }

    let arc = center_form(start, end, rx, ry, x_rotation, large_arc, sweep);
    let tolerance = tolerance.max(f32::EPSILON);

    // One sample per `tolerance` units of (over-estimated) arc length.
    let perimeter = 4.0 * (arc.radii.x + arc.radii.y);
    let max = ((perimeter * arc.sweep_angle.abs() / (2.0 * PI)) / tolerance) as usize;
    let max = max.max(1);

    let mut points = Vec::with_capacity(max);
    for i in 1..max {
        let theta = arc.start_angle + arc.sweep_angle * (i as f32 / max as f32);
        points.push(arc.sample(theta));
    }
    points.push(end);
    points
}

/// An arc in center form: an ellipse, a start angle on it and a signed
/// sweep.
struct CenterForm {
    center: Point<f32>,
    radii: Vector<f32>,
    sin_phi: f32,
    cos_phi: f32,
    start_angle: f32,
    sweep_angle: f32,
}

impl CenterForm {
    /// The point at ellipse parameter `theta`, back in user space.
    fn sample(&self, theta: f32) -> Point<f32> {
        let (sin_theta, cos_theta) = theta.sin_cos();
        point(
            self.center.x + self.radii.x * self.cos_phi * cos_theta
                - self.radii.y * self.sin_phi * sin_theta,
            self.center.y
                + self.radii.x * self.sin_phi * cos_theta
                + self.radii.y * self.cos_phi * sin_theta,
        )
    }
}

/// Convert an endpoint-parameterized arc to center form.
///
/// This is the conversion from appendix F.6.5 of the SVG 1.1
/// specification, with the out-of-range radii correction from F.6.6.
/// Callers must rule out coincident endpoints and zero radii first.
fn center_form(
    start: Point<f32>,
    end: Point<f32>,
    mut rx: f32,
    mut ry: f32,
    x_rotation: Angle<f32>,
    large_arc: bool,
    sweep: SweepDirection,
) -> CenterForm {
    let is_positive_sweep = sweep == SweepDirection::Clockwise;
    let (sin_phi, cos_phi) = x_rotation.radians.sin_cos();

    let mid_x = (start.x - end.x) / 2.0;
    let mid_y = (start.y - end.y) / 2.0;

    // Midpoint of the chord, in the rotated frame.
    let x1 = cos_phi * mid_x + sin_phi * mid_y;
    let y1 = -sin_phi * mid_x + cos_phi * mid_y;

    // Scale the radii up if they cannot span the chord.
    let lambda = (x1 / rx).powi(2) + (y1 / ry).powi(2);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    // Of the two candidate centers, `large_arc`/`sweep` pick one via the
    // sign of k.
    let d = (rx * y1).powi(2) + (ry * x1).powi(2);
    let mut k = ((rx * ry).powi(2) / d - 1.0).abs().sqrt();
    if is_positive_sweep == large_arc {
        k = -k;
    }

    let cx1 = k * rx * y1 / ry;
    let cy1 = -k * ry * x1 / rx;

    let center = point(
        cos_phi * cx1 - sin_phi * cy1 + (start.x + end.x) / 2.0,
        sin_phi * cx1 + cos_phi * cy1 + (start.y + end.y) / 2.0,
    );

    // Angles of the start and end points, on the unit-circle form of the
    // ellipse.
    let ux = (x1 - cx1) / rx;
    let uy = (y1 - cy1) / ry;
    let vx = (-x1 - cx1) / rx;
    let vy = (-y1 - cy1) / ry;

    let start_angle = uy.atan2(ux);
    let mut sweep_angle = (ux * vy - uy * vx).atan2(ux * vx + uy * vy);

    if is_positive_sweep && sweep_angle < 0.0 {
        sweep_angle += 2.0 * PI;
    } else if !is_positive_sweep && sweep_angle > 0.0 {
        sweep_angle -= 2.0 * PI;
    }

    CenterForm {
        center,
        radii: Vector::new(rx, ry),
        sin_phi,
        cos_phi,
        start_angle,
        sweep_angle,
    }
}
