use crate::geometry::curve::CubicBezier;

/// Splits a cubic Bézier so that no piece contains an inflexion point.
///
/// A closed curve (`p1 == p2`) is halved instead, and a curve whose start or
/// end control point coincides with its endpoint is returned whole. The
/// pieces are returned in curve order.
///
/// With two inflexions `t1 < t2` the curve is cut at `t1` first. The
/// remainder covers `[t1, 1]` over its own `[0, 1]`, so `t2` is mapped to
/// `(t2 − t1) / (1 − t1)` before the second cut. Scaling by `(1 − t1) · t2`
/// instead would miss the inflexion point.
#[must_use]
pub fn presplit(bezier: &CubicBezier) -> Vec<CubicBezier> {
    if bezier.p1 == bezier.p2 {
        let (first, second) = bezier.split(0.5);
        return vec![first, second];
    }
    if bezier.p1 == bezier.c1 || bezier.p2 == bezier.c2 {
        return vec![*bezier];
    }

    let mut roots = bezier.inflexion_points();
    roots.sort_by(f64::total_cmp);
    match roots[..] {
        [t] => {
            let (first, second) = bezier.split(t);
            vec![first, second]
        }
        [t1, t2, ..] => {
            let (first, rest) = bezier.split(t1);
            // `rest` covers [t1, 1] of the original over its own [0, 1].
            let (second, third) = rest.split((t2 - t1) / (1.0 - t1));
            vec![first, second, third]
        }
        [] => vec![*bezier],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn curve(points: [(f64, f64); 4]) -> CubicBezier {
        let [p1, c1, c2, p2] = points.map(|(x, y)| Point2::new(x, y));
        CubicBezier::new(p1, c1, c2, p2)
    }

    fn assert_chained(original: &CubicBezier, pieces: &[CubicBezier]) {
        assert_eq!(pieces[0].p1, original.p1);
        assert_eq!(pieces[pieces.len() - 1].p2, original.p2);
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].p2, pair[1].p1);
        }
    }

    #[test]
    fn convex_curve_stays_whole() {
        let b = curve([(100.0, 500.0), (150.0, 100.0), (500.0, 150.0), (350.0, 350.0)]);
        assert_eq!(presplit(&b), vec![b]);
    }

    #[test]
    fn single_inflexion_gives_two_pieces() {
        let b = curve([(150.0, 500.0), (100.0, 100.0), (500.0, 350.0), (350.0, 150.0)]);
        let pieces = presplit(&b);
        assert_eq!(pieces.len(), 2);
        assert_chained(&b, &pieces);
        assert_abs_diff_eq!(pieces[0].p2, b.point_at(0.577_234_777_244_657_5), epsilon = 1e-9);
    }

    #[test]
    fn two_inflexions_split_on_both_points() {
        let b = curve([(100.0, 500.0), (350.0, 100.0), (100.0, 200.0), (500.0, 400.0)]);
        let pieces = presplit(&b);
        assert_eq!(pieces.len(), 3);
        assert_chained(&b, &pieces);

        let mut roots = b.inflexion_points();
        roots.sort_by(f64::total_cmp);
        assert_abs_diff_eq!(pieces[0].p2, b.point_at(roots[0]), epsilon = 1e-9);
        assert_abs_diff_eq!(pieces[1].p2, b.point_at(roots[1]), epsilon = 1e-9);
        assert_abs_diff_eq!(pieces[0].p2, Point2::new(221.941, 261.933), epsilon = 1e-3);
        assert_abs_diff_eq!(pieces[1].p2, Point2::new(270.705, 244.972), epsilon = 1e-3);
        // No piece inflects any more.
        for piece in &pieces {
            assert!(
                piece.inflexion_points().iter().all(|&t| !(1e-6..1.0 - 1e-6).contains(&t)),
                "piece still inflects: {:?}",
                piece.inflexion_points()
            );
        }
    }

    #[test]
    fn closed_curve_is_halved() {
        let b = curve([(100.0, 500.0), (150.0, 100.0), (500.0, 150.0), (100.0, 500.0)]);
        let pieces = presplit(&b);
        assert_eq!(pieces.len(), 2);
        assert_chained(&b, &pieces);
        assert_abs_diff_eq!(pieces[0].p2, Point2::new(268.75, 218.75), epsilon = 1e-9);
    }

    #[test]
    fn coincident_control_point_keeps_curve_whole() {
        let b = curve([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(presplit(&b), vec![b]);
    }
}
