pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod samples;

pub use error::{BiarcError, Result};
