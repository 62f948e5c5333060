//! Error types for the TDS engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can surface from the engine
///
/// Parsing is deliberately lossy: unreadable rows are dropped rather than
/// reported, and empty CSV results degrade to placeholder data at the
/// compatibility boundary. The only parse failure that propagates is a CSV
/// whose header cannot be mapped to a time and a flux column at all.
#[derive(Error, Debug)]
pub enum EngineError {
    /// CSV header detection failed and no positional fallback was possible
    #[error("unrecognized column layout: headers [{headers}]")]
    Format { headers: String },

    /// Curve construction with inconsistent series lengths
    #[error("series length mismatch: time={time_len}, flux={flux_len}")]
    LengthMismatch { time_len: usize, flux_len: usize },

    /// Invalid input outside the parsing fast paths
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON payload error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
