/// Configuration for biarc approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxOptions {
    /// Maximum accepted radial deviation between a segment and its biarc.
    pub tolerance: f64,

    /// Safety cap on the number of segments taken off the work stack.
    pub max_segments: usize,

    /// `|sin θ|` between the end tangents below which they count as parallel.
    pub parallel_tolerance: f64,

    /// Control polygon length below which a segment is accepted as a
    /// degenerate biarc instead of being split further.
    pub min_segment_length: f64,
}

impl Default for ApproxOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            max_segments: 100_000,
            parallel_tolerance: 1e-9,
            min_segment_length: 1e-9,
        }
    }
}

impl ApproxOptions {
    /// Builder: set the deviation tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder: set the safety cap on processed segments.
    #[must_use]
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Builder: set the parallel-tangent threshold.
    #[must_use]
    pub fn with_parallel_tolerance(mut self, parallel_tolerance: f64) -> Self {
        self.parallel_tolerance = parallel_tolerance;
        self
    }

    /// Builder: set the minimum segment length.
    #[must_use]
    pub fn with_min_segment_length(mut self, min_segment_length: f64) -> Self {
        self.min_segment_length = min_segment_length;
        self
    }
}
