//! Placeholder for binary light-curve products.
//!
//! FITS and other binary formats are not supported yet. The entry point is
//! kept so callers can route binary uploads through the same pipeline; it
//! returns the synthetic placeholder series regardless of content.

use crate::models::LightCurve;
use crate::parsing::mock;

/// Stub parser for binary light-curve formats.
///
/// Always returns the placeholder series tagged as Kepler mock data.
pub fn parse_binary(bytes: &[u8]) -> LightCurve {
    log::warn!(
        "binary light-curve input is not supported yet ({} bytes); returning placeholder series",
        bytes.len()
    );
    mock::mock_curve(None)
}
