//! Whitespace-delimited table parser.
//!
//! Covers the plain `.txt`/`.dat` exports that carry no header contract:
//! every line is treated as data, and lines that do not parse (including any
//! textual header) are simply dropped. Unlike the CSV path there is no
//! placeholder fallback: an input with no usable rows yields an empty curve
//! tagged `unknown`.

use crate::models::{CurveMetadata, LightCurve, MissionSource};
use crate::parsing::metadata;

/// Column index holding per-point uncertainties, when present.
const ERROR_COLUMN: usize = 2;

/// Parse whitespace-delimited text into a light curve.
///
/// Rows are split on runs of whitespace and need at least two tokens; token 0
/// is time, token 1 is flux, token 2 (if present) the uncertainty. Comment
/// lines starting with `#` or `%` and blank lines are skipped; rows whose
/// time or flux fails numeric parsing are dropped.
pub fn parse_text(text: &str) -> LightCurve {
    let mut time = Vec::new();
    let mut flux = Vec::new();
    let mut error = Vec::new();
    let mut dropped_rows = 0usize;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }

        match (tokens[0].parse::<f64>(), tokens[1].parse::<f64>()) {
            (Ok(t), Ok(f)) => {
                time.push(t);
                flux.push(f);
                if let Some(cell) = tokens.get(ERROR_COLUMN) {
                    error.push(cell.parse::<f64>().unwrap_or(0.0));
                }
            }
            _ => dropped_rows += 1,
        }
    }

    if dropped_rows > 0 {
        log::debug!("dropped {} rows with non-numeric time/flux", dropped_rows);
    }

    let error = if error.is_empty() || error.len() != time.len() {
        None
    } else {
        Some(error)
    };

    let mut meta = CurveMetadata::new(MissionSource::Unknown);
    meta.target_id = metadata::scan_catalog_id(text);
    meta.campaign = metadata::scan_campaign(text);
    meta.sector = metadata::scan_sector(text);

    match LightCurve::new(time, flux, error, meta) {
        Ok(curve) => curve,
        // lengths are paired per row; unreachable in practice
        Err(e) => {
            log::warn!("discarding inconsistent table parse: {}", e);
            LightCurve::empty(MissionSource::Unknown)
        }
    }
}
