mod arc;
mod biarc;
mod cubic_bezier;
mod line;

pub use arc::Arc;
pub use biarc::BiArc;
pub use cubic_bezier::CubicBezier;
pub use line::Line;

use crate::math::{Point2, Vector2};

/// Trait for 2D parametric curves over the unit parameter range `[0, 1]`.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// First derivative with respect to `t`.
    fn first_derivative(&self, t: f64) -> Vector2;

    /// Second derivative with respect to `t`.
    fn second_derivative(&self, t: f64) -> Vector2;

    /// Returns the point at `t = 0`.
    fn start_point(&self) -> Point2 {
        self.evaluate(0.0)
    }

    /// Returns the point at `t = 1`.
    fn end_point(&self) -> Point2 {
        self.evaluate(1.0)
    }
}
