use tracing::debug;

use crate::geometry::curve::{BiArc, CubicBezier, Line};
use crate::math::polygon_2d::is_clockwise;
use crate::math::{Point2, TOLERANCE};

use super::ApproxOptions;

/// Outcome of fitting a biarc to a single inflexion-free segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The biarc through the incenter transition point.
    Ready(BiArc),
    /// All control points lie on one line.
    Straight,
    /// The end tangents are parallel, so they never meet.
    Parallel,
    /// The tangents meet on the wrong side of the chord.
    Inverted,
    /// The control points leave no usable tangent or arc center.
    Degenerate,
}

/// Builds the biarc of `segment` whose transition point is the incenter of
/// the triangle formed by the endpoints and the intersection of the end
/// tangents.
///
/// Straight segments have no arc to fit and are reported as
/// [`Transition::Straight`]. Any other outcome but [`Transition::Ready`]
/// means the segment has to be halved.
#[must_use]
pub fn transition(segment: &CubicBezier, options: &ApproxOptions) -> Transition {
    if segment.is_collinear(TOLERANCE) {
        return Transition::Straight;
    }

    // A control point on top of its endpoint borrows the other one's direction.
    let c1 = if segment.p1 == segment.c1 { segment.c2 } else { segment.c1 };
    let c2 = if segment.p2 == segment.c2 { segment.c1 } else { segment.c2 };

    let (Ok(tangent1), Ok(tangent2)) = (Line::through(segment.p1, c1), Line::through(segment.p2, c2))
    else {
        return Transition::Degenerate;
    };
    if tangent1.is_parallel_to(&tangent2, options.parallel_tolerance) {
        return Transition::Parallel;
    }
    let Some(v) = tangent1.intersection(&tangent2) else {
        return Transition::Parallel;
    };
    if is_clockwise(&[segment.p1, v, segment.p2]) != segment.is_clockwise() {
        return Transition::Inverted;
    }

    let g = incenter(&segment.p1, &v, &segment.p2);
    match BiArc::new(segment.p1, segment.p1 - c1, segment.p2, segment.p2 - c2, g) {
        Ok(biarc) => Transition::Ready(biarc),
        Err(err) => {
            debug!(%err, "biarc construction failed");
            Transition::Degenerate
        }
    }
}

/// Incenter of the triangle `(p1, v, p2)`: the vertices weighted by the
/// length of the opposite side.
fn incenter(p1: &Point2, v: &Point2, p2: &Point2) -> Point2 {
    let a = (p2 - v).norm();
    let b = (p1 - v).norm();
    let c = (p2 - p1).norm();
    Point2::from((p1.coords * a + p2.coords * b + v.coords * c) / (a + b + c))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Curve;
    use approx::assert_abs_diff_eq;

    fn curve(points: [(f64, f64); 4]) -> CubicBezier {
        let [p1, c1, c2, p2] = points.map(|(x, y)| Point2::new(x, y));
        CubicBezier::new(p1, c1, c2, p2)
    }

    fn fit(bezier: &CubicBezier) -> Transition {
        transition(bezier, &ApproxOptions::default())
    }

    #[test]
    fn quarter_circle_joins_on_the_circle() {
        let k = 55.228_474_98;
        let b = curve([(100.0, 0.0), (100.0, k), (k, 100.0), (0.0, 100.0)]);
        let Transition::Ready(biarc) = fit(&b) else {
            panic!("expected a biarc");
        };
        let h = 100.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(*biarc.transition_point(), Point2::new(h, h), epsilon = 1e-9);
        assert_eq!(*biarc.a1().p1(), b.p1);
        assert_eq!(*biarc.a2().p2(), b.p2);
        assert_abs_diff_eq!(biarc.start_point(), b.p1, epsilon = 1e-9);
        assert_abs_diff_eq!(biarc.end_point(), b.p2, epsilon = 1e-9);
        assert!(biarc.a1().is_clockwise());
        assert!(biarc.a2().is_clockwise());
    }

    #[test]
    fn biarc_orientation_follows_curve() {
        let b = curve([(100.0, 500.0), (250.0, 350.0), (450.0, 350.0), (500.0, 500.0)]);
        let Transition::Ready(biarc) = fit(&b) else {
            panic!("expected a biarc");
        };
        assert_eq!(biarc.a1().is_clockwise(), b.is_clockwise());
        assert_eq!(biarc.a2().is_clockwise(), b.is_clockwise());
    }

    #[test]
    fn parallel_tangents() {
        let b = curve([(600.0, 400.0), (500.0, 400.0), (500.0, 476.0), (600.0, 476.0)]);
        assert_eq!(fit(&b), Transition::Parallel);
    }

    #[test]
    fn tangents_meeting_behind_the_chord() {
        let b = curve([(100.0, 500.0), (150.0, 100.0), (500.0, 150.0), (350.0, 350.0)]);
        assert_eq!(fit(&b), Transition::Inverted);
    }

    #[test]
    fn coincident_control_points_borrow_direction() {
        let b = curve([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let Transition::Ready(biarc) = fit(&b) else {
            panic!("expected a biarc");
        };
        // Start tangent runs along (1, 1), so the first center sits on y = -x.
        let c = biarc.a1().center();
        assert_abs_diff_eq!(c.x + c.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_control_points_are_straight() {
        let collapsed = curve([(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(fit(&collapsed), Transition::Straight);
        let diagonal = curve([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert_eq!(fit(&diagonal), Transition::Straight);
        assert_eq!(fit(&curve([(5.0, 5.0); 4])), Transition::Straight);
    }

    #[test]
    fn incenter_of_right_triangle() {
        // Legs 3 and 4: inradius 1.
        let g = incenter(&Point2::new(3.0, 0.0), &Point2::origin(), &Point2::new(0.0, 4.0));
        assert_abs_diff_eq!(g, Point2::new(1.0, 1.0), epsilon = 1e-12);
    }
}
