use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::is_clockwise;
use crate::math::{Point2, Vector2};

use super::{Arc, Curve, Line};

/// Two tangent-continuous circular arcs: `a1` from `p1` to the transition
/// point, then `a2` from the transition point to `p2`.
///
/// Both arcs sweep in the same direction, the orientation of the triangle
/// (`p1`, transition point, `p2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiArc {
    a1: Arc,
    a2: Arc,
}

impl BiArc {
    /// Computes the biarc through `p1` and `p2` with the given tangents and
    /// transition point `g`.
    ///
    /// Each arc center is the intersection of the normal at its endpoint with
    /// the perpendicular bisector of the chord from that endpoint to `g`.
    /// Tangent vectors only need the right direction; their sense and length
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero tangent or `g` equal to
    /// an endpoint, `GeometryError::Degenerate` when `g` lies on a tangent line
    /// (the normal and the bisector are parallel), and
    /// `GeometryError::NonFinite` when the construction overflows.
    pub fn new(p1: Point2, t1: Vector2, p2: Point2, t2: Vector2, g: Point2) -> Result<Self> {
        let normal1 = Line::perpendicular_at(p1, p1 + t1)?;
        let normal2 = Line::perpendicular_at(p2, p2 + t2)?;

        let bisector1 = Line::perpendicular_at(nalgebra::center(&p1, &g), g)?;
        let bisector2 = Line::perpendicular_at(nalgebra::center(&p2, &g), g)?;

        let c1 = normal1.intersection(&bisector1).ok_or_else(|| {
            GeometryError::Degenerate("transition point lies on the start tangent".into())
        })?;
        let c2 = normal2.intersection(&bisector2).ok_or_else(|| {
            GeometryError::Degenerate("transition point lies on the end tangent".into())
        })?;

        let r1 = (c1 - p1).norm();
        let r2 = (c2 - p2).norm();

        let start1 = angle_of(&(p1 - c1));
        let start2 = angle_of(&(g - c2));

        let clockwise = is_clockwise(&[p1, g, p2]);
        let sweep1 = normalize_sweep(angle_of(&(g - c1)) - start1, clockwise);
        let sweep2 = normalize_sweep(angle_of(&(p2 - c2)) - start2, clockwise);

        let values = [c1.x, c1.y, c2.x, c2.y, r1, r2, sweep1, sweep2];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite("biarc construction").into());
        }

        Ok(Self {
            a1: Arc::new(c1, r1, start1, sweep1, p1, g),
            a2: Arc::new(c2, r2, start2, sweep2, g, p2),
        })
    }

    /// A biarc of two zero-radius arcs joined at the chord midpoint.
    ///
    /// Stands in for straight segments and for segments too short to
    /// approximate meaningfully; both arcs draw as straight lines.
    #[must_use]
    pub fn degenerate(p1: Point2, p2: Point2) -> Self {
        let g = nalgebra::center(&p1, &p2);
        Self {
            a1: Arc::new(p1, 0.0, 0.0, 0.0, p1, g),
            a2: Arc::new(p2, 0.0, 0.0, 0.0, g, p2),
        }
    }

    /// Returns the first arc.
    #[must_use]
    pub fn a1(&self) -> &Arc {
        &self.a1
    }

    /// Returns the second arc.
    #[must_use]
    pub fn a2(&self) -> &Arc {
        &self.a2
    }

    /// Returns both arcs in order.
    #[must_use]
    pub fn arcs(&self) -> [&Arc; 2] {
        [&self.a1, &self.a2]
    }

    /// Returns the transition point shared by both arcs.
    #[must_use]
    pub fn transition_point(&self) -> &Point2 {
        self.a1.p2()
    }

    /// Total length of both arcs.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a1.length() + self.a2.length()
    }

    /// Parameter where the first arc hands over to the second.
    ///
    /// Each arc receives a share of `[0, 1]` proportional to its length.
    /// A biarc without length joins at `0.5`.
    #[must_use]
    pub fn joint_at(&self) -> f64 {
        let total = self.length();
        if total > 0.0 {
            self.a1.length() / total
        } else {
            0.5
        }
    }

    /// Returns whether both arcs have collapsed to zero radius.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a1.is_degenerate() && self.a2.is_degenerate()
    }

    /// Evaluates the biarc at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let (arc, local, _) = self.locate(t);
        arc.point_at(local)
    }

    /// Returns the arc owning parameter `t` (the first arc up to and including
    /// the joint) together with its local parameter and the local/global
    /// scale factor.
    #[must_use]
    pub fn locate(&self, t: f64) -> (&Arc, f64, f64) {
        let s = self.joint_at();
        if t <= s {
            if s > 0.0 {
                (&self.a1, t / s, 1.0 / s)
            } else {
                (&self.a1, 1.0, 0.0)
            }
        } else if s < 1.0 {
            (&self.a2, (t - s) / (1.0 - s), 1.0 / (1.0 - s))
        } else {
            (&self.a2, 0.0, 0.0)
        }
    }
}

impl Curve for BiArc {
    fn evaluate(&self, t: f64) -> Point2 {
        self.point_at(t)
    }

    fn first_derivative(&self, t: f64) -> Vector2 {
        let (arc, local, scale) = self.locate(t);
        arc.first_derivative(local) * scale
    }

    fn second_derivative(&self, t: f64) -> Vector2 {
        let (arc, local, scale) = self.locate(t);
        arc.second_derivative(local) * (scale * scale)
    }
}

fn angle_of(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Adjusts a raw `atan2` difference by a full turn so its sign matches the orientation.
fn normalize_sweep(sweep: f64, clockwise: bool) -> f64 {
    if clockwise && sweep < 0.0 {
        sweep + TAU
    } else if !clockwise && sweep > 0.0 {
        sweep - TAU
    } else {
        sweep
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Upper unit semicircle traversed from (-1,0) to (1,0) through (0,1).
    fn semicircle() -> BiArc {
        BiArc::new(
            Point2::new(-1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Vector2::new(0.0, -1.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn circle_is_reproduced_exactly() {
        let biarc = semicircle();
        for arc in biarc.arcs() {
            assert_abs_diff_eq!(*arc.center(), Point2::origin(), epsilon = 1e-12);
            assert_relative_eq!(arc.radius(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(arc.sweep_angle().abs(), FRAC_PI_2, epsilon = 1e-12);
        }
        assert_relative_eq!(biarc.length(), PI, epsilon = 1e-12);
        assert_relative_eq!(biarc.joint_at(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn endpoints_and_joint_are_interpolated() {
        let biarc = semicircle();
        assert_abs_diff_eq!(biarc.point_at(0.0), Point2::new(-1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(biarc.point_at(1.0), Point2::new(1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            biarc.point_at(biarc.joint_at()),
            *biarc.transition_point(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(biarc.start_point(), Point2::new(-1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(biarc.end_point(), Point2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn arcs_sweep_in_the_orientation_of_the_triangle() {
        let biarc = semicircle();
        let expected = is_clockwise(&[
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ]);
        assert_eq!(biarc.a1().is_clockwise(), expected);
        assert_eq!(biarc.a2().is_clockwise(), expected);
        // Going over the top from left to right decreases the atan2 angle.
        assert!(!expected);
    }

    #[test]
    fn mirrored_biarc_flips_sweep() {
        let biarc = BiArc::new(
            Point2::new(-1.0, 0.0),
            Vector2::new(0.0, -1.0),
            Point2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Point2::new(0.0, -1.0),
        )
        .unwrap();
        assert!(biarc.a1().sweep_angle() > 0.0);
        assert!(biarc.a2().sweep_angle() > 0.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(biarc.point_at(0.25), Point2::new(-h, -h), epsilon = 1e-12);
    }

    #[test]
    fn tangent_continuity_at_incenter_joint() {
        // Tangent lines y = x and y = -(x - 4) / 2 meet at v = (4/3, 4/3).
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(4.0, 0.0);
        let v = Point2::new(4.0 / 3.0, 4.0 / 3.0);
        let (a, b, c) = ((p2 - v).norm(), (p1 - v).norm(), (p2 - p1).norm());
        let g = Point2::from((p1.coords * a + p2.coords * b + v.coords * c) / (a + b + c));
        let biarc = BiArc::new(p1, Vector2::new(1.0, 1.0), p2, Vector2::new(1.0, -0.5), g).unwrap();
        assert_abs_diff_eq!(*biarc.transition_point(), g);
        assert!((biarc.a1().radius() - biarc.a2().radius()).abs() > 1.0);
        let r1 = g - *biarc.a1().center();
        let r2 = g - *biarc.a2().center();
        // Both radii are along the same line through the joint.
        assert_abs_diff_eq!(crate::math::cross_2d(&r1, &r2), 0.0, epsilon = 1e-9);
        // Each center is equidistant from its chord ends.
        assert_relative_eq!((p1 - *biarc.a1().center()).norm(), r1.norm(), epsilon = 1e-9);
        assert_relative_eq!((p2 - *biarc.a2().center()).norm(), r2.norm(), epsilon = 1e-9);
        // The arcs actually end where they claim to.
        assert_abs_diff_eq!(biarc.a1().point_at(1.0), g, epsilon = 1e-9);
        assert_abs_diff_eq!(biarc.a2().point_at(1.0), p2, epsilon = 1e-9);
    }

    #[test]
    fn transition_point_on_tangent_is_degenerate() {
        let result = BiArc::new(
            Point2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Point2::new(4.0, 2.0),
            Vector2::new(0.0, 1.0),
            Point2::new(2.0, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_tangent_is_rejected() {
        let result = BiArc::new(
            Point2::new(0.0, 0.0),
            Vector2::zeros(),
            Point2::new(2.0, 0.0),
            Vector2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn degenerate_biarc_has_no_length() {
        let p1 = Point2::new(1.0, 1.0);
        let p2 = Point2::new(1.0, 1.0 + 1e-12);
        let biarc = BiArc::degenerate(p1, p2);
        assert!(biarc.is_degenerate());
        assert_relative_eq!(biarc.joint_at(), 0.5);
        assert_eq!(*biarc.a1().p1(), p1);
        assert_eq!(*biarc.a2().p2(), p2);
        assert!(!semicircle().is_degenerate());
    }
}
