//! Adaptive biarc approximation of cubic Bézier curves.
//!
//! The curve is first cut at its inflexion points, then every piece is fitted
//! with a biarc. Pieces whose biarc strays further than the tolerance are split
//! where the deviation peaks, and the halves are fitted again.

mod options;
mod presplit;
mod transition;

pub use options::ApproxOptions;
pub use presplit::presplit;
pub use transition::{transition, Transition};

use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::geometry::curve::{BiArc, CubicBezier};
use crate::geometry::pline::Pline;
use crate::operations::query::RadialDeviation;

/// A curve segment paired with the biarc approximating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approx {
    pub bezier: CubicBezier,
    pub biarc: BiArc,
}

/// Approximates a cubic Bézier curve with a chain of biarcs.
pub struct ApproxCubicBezier {
    bezier: CubicBezier,
    options: ApproxOptions,
}

impl ApproxCubicBezier {
    /// Creates a new approximation with default options and the given tolerance.
    #[must_use]
    pub fn new(bezier: CubicBezier, tolerance: f64) -> Self {
        Self::with_options(bezier, ApproxOptions::default().with_tolerance(tolerance))
    }

    /// Creates a new approximation with explicit options.
    #[must_use]
    pub fn with_options(bezier: CubicBezier, options: ApproxOptions) -> Self {
        Self { bezier, options }
    }

    /// Executes the approximation.
    ///
    /// The result is in curve order: the first segment starts at `p1`, the
    /// last one ends at `p2`, and neighbours share their endpoints exactly.
    /// Every biarc stays within the tolerance of its segment. Straight
    /// segments and segments shorter than the minimum length are paired with a
    /// degenerate biarc, which draws as straight lines. A straight segment
    /// that turns back on itself is first split at the turn.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for non-finite coordinates or a
    /// tolerance that is not a positive number, and
    /// `OperationError::SegmentLimitExceeded` when more than
    /// `max_segments` segments are examined.
    pub fn execute(&self) -> Result<Vec<Approx>> {
        self.validate()?;
        let options = &self.options;

        // Work stack; the next segment in curve order is on top.
        let mut stack = presplit(&self.bezier);
        stack.reverse();
        let mut output = Vec::new();
        let mut examined = 0_usize;

        while let Some(segment) = stack.pop() {
            examined += 1;
            if examined > options.max_segments {
                warn!(limit = options.max_segments, "segment limit exceeded");
                return Err(OperationError::SegmentLimitExceeded {
                    limit: options.max_segments,
                }
                .into());
            }

            if segment.control_polygon_length() <= options.min_segment_length {
                debug!(p1 = ?segment.p1, "accepting degenerate segment");
                output.push(Approx {
                    bezier: segment,
                    biarc: BiArc::degenerate(segment.p1, segment.p2),
                });
                continue;
            }

            let biarc = match transition(&segment, options) {
                Transition::Ready(biarc) => biarc,
                Transition::Straight => {
                    if let Some(&t) = segment.axis_turning_points().first() {
                        debug!(t, "straight segment turns back, splitting");
                        push_halves(&mut stack, &segment, t);
                    } else {
                        debug!(p1 = ?segment.p1, p2 = ?segment.p2, "accepting straight segment");
                        output.push(Approx {
                            bezier: segment,
                            biarc: BiArc::degenerate(segment.p1, segment.p2),
                        });
                    }
                    continue;
                }
                outcome => {
                    debug!(?outcome, "no biarc for segment, halving");
                    push_halves(&mut stack, &segment, 0.5);
                    continue;
                }
            };

            let deviation = RadialDeviation::new(&segment, &biarc).execute();
            if deviation.distance > options.tolerance {
                let t = if deviation.parameter > 0.0 && deviation.parameter < 1.0 {
                    deviation.parameter
                } else {
                    0.5
                };
                debug!(distance = deviation.distance, t, "segment rejected");
                push_halves(&mut stack, &segment, t);
            } else {
                debug!(distance = deviation.distance, "segment accepted");
                output.push(Approx {
                    bezier: segment,
                    biarc,
                });
            }
        }

        debug!(segments = output.len(), examined, "approximation finished");
        Ok(output)
    }

    fn validate(&self) -> Result<()> {
        if !self.bezier.is_finite() {
            return Err(OperationError::InvalidInput("non-finite control point".into()).into());
        }
        let tolerance = self.options.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tolerance must be a positive number, got {tolerance}"
            ))
            .into());
        }
        Ok(())
    }
}

/// Splits `segment` at `t` and pushes the halves so the first one pops next.
fn push_halves(stack: &mut Vec<CubicBezier>, segment: &CubicBezier, t: f64) {
    let (first, second) = segment.split(t);
    stack.push(second);
    stack.push(first);
}

/// Approximates `bezier` with biarcs under default options.
///
/// # Errors
///
/// See [`ApproxCubicBezier::execute`].
pub fn approx_cubic_bezier(bezier: &CubicBezier, tolerance: f64) -> Result<Vec<Approx>> {
    ApproxCubicBezier::new(*bezier, tolerance).execute()
}

/// Converts an approximation into a bulge-encoded polyline.
#[must_use]
pub fn to_pline(approximation: &[Approx]) -> Pline {
    Pline::from_biarcs(approximation.iter().map(|approx| &approx.biarc))
}
