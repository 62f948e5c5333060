pub mod light_curve;
pub mod prediction;

pub use light_curve::*;
pub use prediction::*;
