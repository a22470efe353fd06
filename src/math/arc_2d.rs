/// 2D arc/bulge math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`, with the sweep measured
/// in the `atan2` direction (clockwise on a Y-down screen).
/// - `bulge = 0`: straight line
/// - `bulge > 0`: positive sweep
/// - `bulge < 0`: negative sweep
/// - `|bulge| = 1`: semicircle
use super::{Point2, Vector2, TOLERANCE};

/// Circle parameters of a bulge-encoded arc segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

/// Converts a sweep angle to the bulge of the same arc.
#[must_use]
pub fn bulge_from_sweep(sweep_angle: f64) -> f64 {
    (sweep_angle / 4.0).tan()
}

/// Converts a bulge-defined arc segment from `p0` to `p1` to center-radius-angle form.
///
/// Returns `None` for zero-length chords and for `bulge = 0` (straight segment).
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<BulgeArc> {
    let chord = p1 - p0;
    let chord_len = chord.norm();
    if chord_len < TOLERANCE || bulge.abs() < TOLERANCE {
        return None;
    }

    // Signed distance from the chord midpoint to the center, in half-chords.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = p0 + chord * 0.5;
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

    Some(BulgeArc {
        center,
        radius,
        start_angle,
        sweep_angle: 4.0 * bulge.atan(),
    })
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
