use crate::math::arc_2d::{arc_from_bulge, arc_point_at};
use crate::math::Point2;

use super::curve::BiArc;

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)` describes the segment to the next vertex:
/// - `0` = straight line to next vertex
/// - `> 0` = arc with positive sweep (clockwise on a Y-down screen)
/// - `< 0` = arc with negative sweep
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub point: Point2,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given position and bulge.
    #[must_use]
    pub fn new(point: Point2, bulge: f64) -> Self {
        Self { point, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(point: Point2) -> Self {
        Self { point, bulge: 0.0 }
    }
}

/// A polyline with mixed straight-line and circular-arc segments.
///
/// This is the hand-off format for consumers that draw or export arc paths.
#[derive(Debug, Clone, Default)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Builds an open polyline from consecutive biarcs.
    ///
    /// Every arc contributes its start vertex; the end point of the last arc
    /// closes the chain. Degenerate arcs become straight segments.
    #[must_use]
    pub fn from_biarcs<'a, I>(biarcs: I) -> Self
    where
        I: IntoIterator<Item = &'a BiArc>,
    {
        let mut vertices = Vec::new();
        let mut last = None;
        for biarc in biarcs {
            for arc in biarc.arcs() {
                let bulge = if arc.is_degenerate() { 0.0 } else { arc.bulge() };
                vertices.push(PlineVertex::new(*arc.p1(), bulge));
                last = Some(*arc.p2());
            }
        }
        if let Some(end) = last {
            vertices.push(PlineVertex::line(end));
        }
        Self {
            vertices,
            closed: false,
        }
    }

    /// Flattens the polyline into points, splitting arcs into chords whose
    /// sagitta stays within `tolerance`.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let seg_count = self.segment_count();
        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point);

        for i in 0..seg_count {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];

            if let Some(arc) = arc_from_bulge(&v0.point, &v1.point, v0.bulge) {
                let n_sub = arc_subdivision_count(arc.radius, arc.sweep_angle.abs(), tolerance);
                for j in 1..n_sub {
                    let t = f64::from(j) / f64::from(n_sub);
                    points.push(arc_point_at(
                        &arc.center,
                        arc.radius,
                        arc.start_angle,
                        arc.sweep_angle,
                        t,
                    ));
                }
            }
            points.push(v1.point);
        }

        points
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
