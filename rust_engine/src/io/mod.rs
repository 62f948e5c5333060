//! Loading helpers around the format parsers.

pub mod checksum;
pub mod loaders;

pub use loaders::LightCurveLoader;
