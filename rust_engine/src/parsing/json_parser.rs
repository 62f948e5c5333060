//! JSON light-curve payload parser.
//!
//! Upload front ends commonly deliver column arrays as JSON. Field naming
//! varies between producers, so each column is located by trying candidate
//! keys in order, the same way dark-period payloads are sniffed elsewhere in
//! the system.

use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::models::{CurveMetadata, LightCurve};
use crate::parsing::metadata;

/// Candidate keys for the time array
const TIME_KEYS: &[&str] = &["time", "times", "bjd", "jd", "t"];

/// Candidate keys for the flux array
const FLUX_KEYS: &[&str] = &["flux", "fluxes", "brightness", "pdcsap_flux", "sap_flux"];

/// Candidate keys for the uncertainty array
const ERROR_KEYS: &[&str] = &["error", "errors", "flux_err", "err", "uncertainty"];

/// Parse a JSON object holding parallel column arrays into a light curve.
///
/// Time and flux arrays are required and must be fully numeric; an
/// uncertainty array is optional and is dropped with a diagnostic when its
/// length does not match.
pub fn parse_json_str(text: &str) -> Result<LightCurve> {
    let value: Value = serde_json::from_str(text)?;
    let obj = value
        .as_object()
        .ok_or_else(|| EngineError::InvalidInput("expected a JSON object payload".into()))?;

    let time = find_numeric_array(obj, TIME_KEYS)
        .ok_or_else(|| EngineError::InvalidInput("no numeric time array found".into()))?;
    let flux = find_numeric_array(obj, FLUX_KEYS)
        .ok_or_else(|| EngineError::InvalidInput("no numeric flux array found".into()))?;

    let error = match find_numeric_array(obj, ERROR_KEYS) {
        Some(err) if err.len() == time.len() => Some(err),
        Some(err) => {
            log::warn!(
                "uncertainty array length {} does not match {} measurements; dropping it",
                err.len(),
                time.len()
            );
            None
        }
        None => None,
    };

    let lower = text.to_lowercase();
    let mut meta = CurveMetadata::new(metadata::infer_mission(&lower));
    meta.target_id = metadata::scan_catalog_id(text);
    meta.campaign = metadata::scan_campaign(text);
    meta.sector = metadata::scan_sector(text);

    LightCurve::new(time, flux, error, meta)
}

/// Find the first candidate key holding a fully numeric array.
fn find_numeric_array(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<Vec<f64>> {
    for key in keys {
        if let Some(value) = obj.get(*key) {
            if let Some(arr) = value.as_array() {
                let nums: Vec<f64> = arr.iter().filter_map(|v| v.as_f64()).collect();
                if nums.len() == arr.len() {
                    return Some(nums);
                }
            }
        }
    }
    None
}
