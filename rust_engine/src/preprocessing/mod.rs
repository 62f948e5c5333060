//! Validation of parsed light curves before scoring.

pub mod validator;

pub use validator::{CurveValidator, ValidationResult, ValidationStats};
