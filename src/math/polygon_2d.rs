use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive when the vertices run in the direction of increasing `atan2`
/// angle: counter-clockwise with Y up, clockwise on a Y-down screen.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += (points[j].x - points[i].x) * (points[j].y + points[i].y);
    }
    -sum * 0.5
}

/// Orientation test for a closed polygon in screen coordinates (Y down).
///
/// Returns `true` for clockwise vertex order, which is the same direction as
/// a positive arc sweep angle. Degenerate polygons (zero area) report `false`.
#[must_use]
pub fn is_clockwise(points: &[Point2]) -> bool {
    signed_area_2d(points) > 0.0
}
