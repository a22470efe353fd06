mod radial_deviation;

pub use radial_deviation::{radial_direction_intersection, RadialDeviation, RadialDeviationResult};
