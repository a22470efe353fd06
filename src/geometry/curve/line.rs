use crate::error::{GeometryError, Result};
use crate::math::{cross_2d, Point2, Vector2};

/// An infinite line in slope form: `y - point.y = slope * (x - point.x)`.
///
/// Vertical lines have no finite slope and get their own variant instead of
/// an infinite slope value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    /// A non-vertical line through `point` with the given `slope`.
    Sloped { point: Point2, slope: f64 },
    /// The vertical line `x = const`.
    Vertical { x: f64 },
}

impl Line {
    /// Creates a line through a point with an explicit slope.
    #[must_use]
    pub fn with_slope(point: Point2, slope: f64) -> Self {
        Self::Sloped { point, slope }
    }

    /// Creates the vertical line through `x`.
    #[must_use]
    pub fn vertical(x: f64) -> Self {
        Self::Vertical { x }
    }

    /// Creates the line through two points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points coincide.
    pub fn through(a: Point2, b: Point2) -> Result<Self> {
        if a == b {
            return Err(GeometryError::ZeroVector.into());
        }
        if a.x == b.x {
            return Ok(Self::vertical(a.x));
        }
        Ok(Self::with_slope(a, (b.y - a.y) / (b.x - a.x)))
    }

    /// Creates the line through `p` perpendicular to the line (`p`, `through`).
    ///
    /// A horizontal reference line gives a vertical result and a vertical
    /// reference line gives a horizontal one.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `p` and `through` coincide.
    pub fn perpendicular_at(p: Point2, through: Point2) -> Result<Self> {
        match Self::through(p, through)? {
            Self::Vertical { .. } => Ok(Self::with_slope(p, 0.0)),
            Self::Sloped { slope, .. } if slope == 0.0 => Ok(Self::vertical(p.x)),
            Self::Sloped { slope, .. } => Ok(Self::with_slope(p, -1.0 / slope)),
        }
    }

    /// Returns the unit direction of the line (pointing towards increasing x,
    /// or increasing y for vertical lines).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        match *self {
            Self::Sloped { slope, .. } => Vector2::new(1.0, slope).normalize(),
            Self::Vertical { .. } => Vector2::new(0.0, 1.0),
        }
    }

    /// Returns whether the sine of the angle between the two lines is at most `tolerance`.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self, tolerance: f64) -> bool {
        cross_2d(&self.direction(), &other.direction()).abs() <= tolerance
    }

    /// Computes the intersection point of this line and another one.
    ///
    /// Solves for x, then substitutes back for y. Returns `None` for lines of
    /// equal slope, including two vertical lines.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point2> {
        match (*self, *other) {
            (Self::Vertical { .. }, Self::Vertical { .. }) => None,
            (Self::Vertical { x }, Self::Sloped { point, slope })
            | (Self::Sloped { point, slope }, Self::Vertical { x }) => {
                Some(Point2::new(x, slope * (x - point.x) + point.y))
            }
            (
                Self::Sloped { point: p, slope: m },
                Self::Sloped {
                    point: q,
                    slope: n,
                },
            ) => {
                if m == n {
                    return None;
                }
                let x = (m * p.x - n * q.x - p.y + q.y) / (m - n);
                let y = m * (x - p.x) + p.y;
                let point = Point2::new(x, y);
                (x.is_finite() && y.is_finite()).then_some(point)
            }
        }
    }
}
