//! Parsers for light-curve data formats.
//!
//! This module turns raw uploaded text or bytes into normalized
//! [`crate::models::LightCurve`] records. Input files in the wild are only
//! loosely structured, so the parsers lean on keyword sniffing and lossy
//! row handling rather than strict schemas.
//!
//! # Parsers
//!
//! - [`csv_parser`]: comma-separated tables with header detection
//! - [`text_parser`]: whitespace-delimited tables without a header contract
//! - [`json_parser`]: JSON payloads with candidate-key column arrays
//! - [`binary_parser`]: placeholder for FITS-like binary products
//! - [`mock`]: deterministic synthetic series used by fallback paths
//!
//! # Example
//!
//! ```
//! use tds_rust::parsing::parse_csv;
//!
//! let curve = parse_csv("time,flux\n0.0,1.0\n0.02,0.99\n")
//!     .expect("recognizable header");
//! assert_eq!(curve.len(), 2);
//! ```

pub mod binary_parser;
pub mod csv_parser;
pub mod json_parser;
pub mod metadata;
pub mod mock;
pub mod text_parser;

#[cfg(test)]
mod json_parser_tests;
#[cfg(test)]
mod text_parser_tests;

pub use binary_parser::parse_binary;
pub use csv_parser::{parse_csv, parse_csv_outcome, ParseOutcome};
pub use json_parser::parse_json_str;
pub use text_parser::parse_text;
