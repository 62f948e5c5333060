//! # TDS Rust Engine
//!
//! Light-curve ingestion and transit scoring engine.
//!
//! This crate provides the Rust core of the Transit Detection System (TDS):
//! it normalizes astronomical brightness-over-time measurements from loosely
//! structured text sources into a common [`models::LightCurve`] shape, checks
//! them for physical plausibility, and scores the likelihood that they contain
//! a transiting exoplanet.
//!
//! ## Features
//!
//! - **Parsing**: column-sniffing CSV, whitespace-delimited tables, JSON
//!   payloads, and a placeholder for binary (FITS-like) inputs
//! - **Preprocessing**: plausibility validation with detailed diagnostics
//! - **Scoring**: signal statistics combined into a calibrated transit
//!   probability and derived planet characteristics
//! - **Loading**: extension-based dispatch with provenance checksums
//!
//! ## Architecture
//!
//! - [`models`]: `LightCurve` and `Prediction` data types
//! - [`parsing`]: format-specific parsers producing `LightCurve`
//! - [`preprocessing`]: validation of parsed curves
//! - [`scoring`]: feature extraction and the transit predictor
//! - [`io`]: file/string loading helpers
//! - [`config`]: engine settings (weights, thresholds, load delay)
//!
//! The probability produced by [`scoring::TransitPredictor`] is a heuristic
//! blend of summary statistics, not the output of a trained detector.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod scoring;

pub use error::{EngineError, Result};
pub use models::{LightCurve, MissionSource, PlanetType, Prediction};
pub use scoring::TransitPredictor;
