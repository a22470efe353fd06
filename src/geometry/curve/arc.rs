use crate::math::arc_2d::{arc_point_at, bulge_from_sweep};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::Curve;

/// A circular arc in the plane.
///
/// Angles are in radians and measured with `atan2`, so on a Y-down screen a
/// positive sweep runs clockwise. The endpoints are redundant with the
/// center/radius/angle form but are kept so that consecutive arcs share
/// bit-identical joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep_angle: f64,
    p1: Point2,
    p2: Point2,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius; zero only for degenerate arcs
    /// * `start_angle` - Angle of `p1` as seen from the center
    /// * `sweep_angle` - Signed sweep from `p1` to `p2`
    /// * `p1`, `p2` - Start and end points
    #[must_use]
    pub fn new(
        center: Point2,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        p1: Point2,
        p2: Point2,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep_angle,
            p1,
            p2,
        }
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep angle in radians.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// Returns the start point.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Whether the arc runs clockwise on a Y-down screen.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.sweep_angle > 0.0
    }

    /// Arc length `r * |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }

    /// Returns whether the radius has collapsed to zero.
    ///
    /// Degenerate arcs only occur for segments too short to approximate and
    /// should be skipped when drawing.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.radius < TOLERANCE
    }

    /// Bulge of the arc (`tan(sweep / 4)`), for bulge-encoded polylines.
    #[must_use]
    pub fn bulge(&self) -> f64 {
        bulge_from_sweep(self.sweep_angle)
    }

    /// Evaluates the arc at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, self.sweep_angle, t)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        self.point_at(t)
    }

    fn first_derivative(&self, t: f64) -> Vector2 {
        let angle = self.start_angle + self.sweep_angle * t;
        Vector2::new(-angle.sin(), angle.cos()) * (self.radius * self.sweep_angle)
    }

    fn second_derivative(&self, t: f64) -> Vector2 {
        let angle = self.start_angle + self.sweep_angle * t;
        Vector2::new(angle.cos(), angle.sin()) * (-self.radius * self.sweep_angle * self.sweep_angle)
    }
}
