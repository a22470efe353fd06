use crate::math::polygon_2d::is_clockwise;
use crate::math::polynomial::solve_quadratic;
use crate::math::{cross_2d, Point2, Vector2, TOLERANCE};

use super::Curve;

/// Turning points closer than this to either end are ignored.
const TURN_MARGIN: f64 = 1e-9;

/// A 2D cubic Bézier curve defined by its start point, two control points and end point.
///
/// `∀ t ∈ [0, 1]: B(t) = (1-t)³ p1 + 3(1-t)² t c1 + 3(1-t) t² c2 + t³ p2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub p1: Point2,
    /// First control point.
    pub c1: Point2,
    /// Second control point.
    pub c2: Point2,
    /// End point.
    pub p2: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bézier curve.
    #[must_use]
    pub fn new(p1: Point2, c1: Point2, c2: Point2, p2: Point2) -> Self {
        Self { p1, c1, c2, p2 }
    }

    /// Evaluates the curve at `t` with the Bernstein polynomials.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        Point2::from(
            self.p1.coords * (mt * mt * mt)
                + self.c1.coords * (3.0 * mt * mt * t)
                + self.c2.coords * (3.0 * mt * t * t)
                + self.p2.coords * (t * t * t),
        )
    }

    /// Evaluates the first derivative `B'(t)`.
    #[must_use]
    pub fn first_derivative_at(&self, t: f64) -> Vector2 {
        let mt = 1.0 - t;
        (self.c1 - self.p1) * (3.0 * mt * mt)
            + (self.c2 - self.c1) * (6.0 * mt * t)
            + (self.p2 - self.c2) * (3.0 * t * t)
    }

    /// Evaluates the second derivative `B''(t)`.
    #[must_use]
    pub fn second_derivative_at(&self, t: f64) -> Vector2 {
        let first = self.c2.coords - self.c1.coords * 2.0 + self.p1.coords;
        let second = self.p2.coords - self.c2.coords * 2.0 + self.c1.coords;
        first * (6.0 * (1.0 - t)) + second * (6.0 * t)
    }

    /// Splits the curve at `t` with de Casteljau's construction.
    ///
    /// Both halves share the split point exactly and together trace the
    /// original curve.
    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let ab = self.p1 + (self.c1 - self.p1) * t;
        let bc = self.c1 + (self.c2 - self.c1) * t;
        let cd = self.c2 + (self.p2 - self.c2) * t;

        let abc = ab + (bc - ab) * t;
        let bcd = bc + (cd - bc) * t;

        let split = abc + (bcd - abc) * t;

        (
            Self::new(self.p1, ab, abc, split),
            Self::new(split, bcd, cd, self.p2),
        )
    }

    /// Parameters of the inflexion points strictly inside `(0, 1)`.
    ///
    /// Solves `X'·Y'' - X''·Y' = 0`, which reduces to a quadratic (or linear)
    /// equation in `t`. The order of the returned roots is unspecified.
    #[must_use]
    pub fn inflexion_points(&self) -> Vec<f64> {
        let a = self.c1 - self.p1;
        let b = self.c2 - self.c1 - a;
        let c = self.p2 - self.c2 - a - b * 2.0;

        solve_quadratic(cross_2d(&b, &c), cross_2d(&a, &c), cross_2d(&a, &b))
            .into_iter()
            .filter(|&t| t > 0.0 && t < 1.0)
            .collect()
    }

    /// Orientation of the control polygon, used as an orientation heuristic
    /// for the whole curve. See [`is_clockwise`].
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&[self.p1, self.c1, self.c2, self.p2])
    }

    /// Total length of the control polygon, an upper bound of the arc length.
    #[must_use]
    pub fn control_polygon_length(&self) -> f64 {
        (self.c1 - self.p1).norm() + (self.c2 - self.c1).norm() + (self.p2 - self.c2).norm()
    }

    /// Returns whether all four control points lie within `tolerance` of one line.
    ///
    /// Such a curve is a straight segment (possibly doubling back on itself).
    #[must_use]
    pub fn is_collinear(&self, tolerance: f64) -> bool {
        let Some(axis) = self.axis() else {
            return true;
        };
        [self.p2 - self.p1, self.c1 - self.p1, self.c2 - self.p1]
            .iter()
            .all(|v| cross_2d(&axis, v).abs() <= tolerance)
    }

    /// Parameters strictly inside `(0, 1)` where the curve's motion along its
    /// main axis stops, in increasing order.
    ///
    /// For a collinear curve these are the points where it turns back on
    /// itself. Splitting there leaves pieces that run one way along the line.
    #[must_use]
    pub fn axis_turning_points(&self) -> Vec<f64> {
        let Some(axis) = self.axis() else {
            return Vec::new();
        };
        let along = |from: &Point2, to: &Point2| (to - from).dot(&axis);
        let d0 = along(&self.p1, &self.c1);
        let d1 = along(&self.c1, &self.c2);
        let d2 = along(&self.c2, &self.p2);

        let mut roots: Vec<f64> = solve_quadratic(d0 - 2.0 * d1 + d2, 2.0 * (d1 - d0), d0)
            .into_iter()
            .filter(|&t| t > TURN_MARGIN && t < 1.0 - TURN_MARGIN)
            .collect();
        roots.sort_by(f64::total_cmp);
        roots
    }

    /// Unit direction of the longest control leg measured from `p1`, or
    /// `None` when all control points coincide.
    fn axis(&self) -> Option<Vector2> {
        [self.p2 - self.p1, self.c1 - self.p1, self.c2 - self.p1]
            .into_iter()
            .max_by(|a, b| a.norm_squared().total_cmp(&b.norm_squared()))
            .filter(|v| v.norm() >= TOLERANCE)
            .map(|v| v / v.norm())
    }

    /// Returns whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.p1, self.c1, self.c2, self.p2]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        self.point_at(t)
    }

    fn first_derivative(&self, t: f64) -> Vector2 {
        self.first_derivative_at(t)
    }

    fn second_derivative(&self, t: f64) -> Vector2 {
        self.second_derivative_at(t)
    }
}
