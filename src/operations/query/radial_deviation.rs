use crate::geometry::curve::{BiArc, CubicBezier, Curve};
use crate::math::root_finder::{find_root, RootFunction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Distance kept from the segment ends when searching for stationary
/// center distances. Both ends are stationary by construction.
const END_MARGIN: f64 = 1e-6;

/// Result of a radial deviation query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialDeviationResult {
    /// The largest deviation found between the curve and the biarc.
    pub distance: f64,
    /// Curve parameter where that deviation occurs, the split candidate.
    pub parameter: f64,
}

/// Measures how far a cubic Bézier strays from the biarc approximating it.
///
/// Three candidates are compared: the distance between the transition point
/// and its radial correspondence on the curve, and the deviation from each
/// arc's circle where the distance to that arc's center is stationary.
pub struct RadialDeviation<'a> {
    bezier: &'a CubicBezier,
    biarc: &'a BiArc,
}

impl<'a> RadialDeviation<'a> {
    /// Creates a new `RadialDeviation` query.
    #[must_use]
    pub fn new(bezier: &'a CubicBezier, biarc: &'a BiArc) -> Self {
        Self { bezier, biarc }
    }

    /// Executes the query.
    ///
    /// When the transition point has no radial correspondence on the curve
    /// the deviation is unbounded: `distance` is infinite and `parameter` is
    /// the biarc's joint parameter, so the caller splits there.
    #[must_use]
    pub fn execute(&self) -> RadialDeviationResult {
        let joint = self.biarc.joint_at();
        let Some(u_joint) = radial_direction_intersection(self.bezier, self.biarc, joint) else {
            return RadialDeviationResult {
                distance: f64::INFINITY,
                parameter: joint,
            };
        };

        let at_joint = (self.bezier.point_at(u_joint) - self.biarc.transition_point()).norm();
        let first = self.circle_deviation(
            self.biarc.a1().center(),
            self.biarc.a1().radius(),
            END_MARGIN,
            u_joint,
        );
        let second = self.circle_deviation(
            self.biarc.a2().center(),
            self.biarc.a2().radius(),
            u_joint,
            1.0 - END_MARGIN,
        );

        largest_deviation(
            RadialDeviationResult {
                distance: at_joint,
                parameter: u_joint,
            },
            first,
            second,
        )
    }

    /// Deviation from the circle `(center, radius)` where the curve's
    /// distance to `center` is stationary inside `[lower, upper]`.
    fn circle_deviation(
        &self,
        center: &Point2,
        radius: f64,
        lower: f64,
        upper: f64,
    ) -> Option<RadialDeviationResult> {
        if upper <= lower {
            return None;
        }
        let stationary = CenterDistanceStationary {
            curve: self.bezier,
            center: *center,
        };
        let parameter = find_root(&stationary, lower, upper)?;
        let distance = ((self.bezier.point_at(parameter) - center).norm() - radius).abs();
        Some(RadialDeviationResult {
            distance,
            parameter,
        })
    }
}

/// Picks the largest of the three candidates.
///
/// The first arc's deviation wins only when strictly larger than both others;
/// otherwise the second arc's wins when larger than the joint's. Ties between
/// the arcs therefore go to the second arc, and the joint takes the rest.
fn largest_deviation(
    at_joint: RadialDeviationResult,
    first: Option<RadialDeviationResult>,
    second: Option<RadialDeviationResult>,
) -> RadialDeviationResult {
    let second_distance = second.map_or(0.0, |d1| d1.distance);
    match (first, second) {
        (Some(d0), _) if d0.distance > second_distance && d0.distance > at_joint.distance => d0,
        (_, Some(d1)) if d1.distance > at_joint.distance => d1,
        _ => at_joint,
    }
}

/// Finds the curve parameter whose point lies on the radial line through the
/// biarc point at `t`, the line through that point and its arc's center.
///
/// Parameters `0` and `1` map onto themselves because the curve and the biarc
/// share their endpoints. Returns `None` when the radial line does not cross
/// the curve, or when the owning arc has collapsed to a point.
#[must_use]
pub fn radial_direction_intersection(bezier: &CubicBezier, biarc: &BiArc, t: f64) -> Option<f64> {
    if t <= 0.0 {
        return Some(0.0);
    }
    if t >= 1.0 {
        return Some(1.0);
    }

    let point = biarc.point_at(t);
    let (arc, _, _) = biarc.locate(t);
    let radial = point - arc.center();
    let len = radial.norm();
    if len < TOLERANCE {
        return None;
    }

    let crossing = RadialCrossing {
        curve: bezier,
        point,
        normal: Vector2::new(-radial.y, radial.x) / len,
    };
    find_root(&crossing, 0.0, 1.0)
}

/// Signed offset of `curve(u)` from the line through `point` orthogonal to `normal`.
struct RadialCrossing<'a, C: Curve> {
    curve: &'a C,
    point: Point2,
    normal: Vector2,
}

impl<C: Curve> RootFunction for RadialCrossing<'_, C> {
    fn value(&self, u: f64) -> f64 {
        (self.curve.evaluate(u) - self.point).dot(&self.normal)
    }

    fn derivative(&self, u: f64) -> f64 {
        self.curve.first_derivative(u).dot(&self.normal)
    }
}

/// Half the derivative of the squared distance from `curve(u)` to `center`.
struct CenterDistanceStationary<'a, C: Curve> {
    curve: &'a C,
    center: Point2,
}

impl<C: Curve> RootFunction for CenterDistanceStationary<'_, C> {
    fn value(&self, u: f64) -> f64 {
        (self.curve.evaluate(u) - self.center).dot(&self.curve.first_derivative(u))
    }

    fn derivative(&self, u: f64) -> f64 {
        let d1 = self.curve.first_derivative(u);
        d1.dot(&d1) + (self.curve.evaluate(u) - self.center).dot(&self.curve.second_derivative(u))
    }
}
