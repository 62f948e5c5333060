//! Column-sniffing CSV parser.
//!
//! Real light-curve exports disagree on header naming, so column selection
//! tries known keyword sets in priority order before falling back to
//! positional columns. Row handling is deliberately lossy: rows that fail
//! numeric parsing are dropped, not reported.

use crate::error::{EngineError, Result};
use crate::models::{CurveMetadata, LightCurve};
use crate::parsing::{metadata, mock};

/// Header keywords accepted for the time column, in priority order
const TIME_KEYS: &[&str] = &["time", "bjd", "jd", "date", "t", "x", "0"];

/// Header keywords accepted for the flux column, in priority order
const FLUX_KEYS: &[&str] = &[
    "flux",
    "pdcsap_flux",
    "sap_flux",
    "brightness",
    "magnitude",
    "y",
    "1",
];

/// Header keywords accepted for the per-point uncertainty column
const ERROR_KEYS: &[&str] = &["error", "flux_err", "err", "sigma", "uncertainty"];

/// Outcome of a strict CSV parse.
#[derive(Debug)]
pub enum ParseOutcome {
    /// At least one row yielded a numeric time/flux pair.
    Curve(LightCurve),
    /// The header was understood but no row survived numeric parsing.
    Empty,
}

/// Parse CSV text into a light curve, preserving the historical fallback:
/// an input with zero parseable rows yields the synthetic placeholder series
/// instead of an error, so downstream consumers never crash on bad uploads.
///
/// Fails only when the header cannot be mapped to a time and a flux column
/// at all (see [`parse_csv_outcome`]).
pub fn parse_csv(text: &str) -> Result<LightCurve> {
    match parse_csv_outcome(text)? {
        ParseOutcome::Curve(curve) => Ok(curve),
        ParseOutcome::Empty => {
            log::warn!("CSV contained no parseable rows; substituting placeholder series");
            Ok(mock::mock_curve(None))
        }
    }
}

/// Parse CSV text, surfacing emptiness as a distinct outcome.
///
/// The first line is the header. Header cells are lower-cased and trimmed,
/// then matched against the keyword sets; if time or flux stays unmatched and
/// at least two columns exist, columns 0/1(/2) are assumed positionally.
/// Fewer than two columns with no match is a format error naming the headers
/// seen.
pub fn parse_csv_outcome(text: &str) -> Result<ParseOutcome> {
    let header_line = text.lines().next().unwrap_or("");
    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let time_match = find_column(&headers, TIME_KEYS);
    let flux_match = find_column(&headers, FLUX_KEYS);

    let (time_idx, flux_idx, error_idx) = match (time_match, flux_match) {
        (Some(time), Some(flux)) => (time, flux, find_column(&headers, ERROR_KEYS)),
        _ if headers.len() >= 2 => {
            log::warn!(
                "no recognizable time/flux headers in [{}]; assuming positional columns",
                headers.join(", ")
            );
            (0, 1, (headers.len() > 2).then_some(2))
        }
        _ => {
            return Err(EngineError::Format {
                headers: headers.join(", "),
            });
        }
    };

    let required_width = time_idx.max(flux_idx) + 1;
    let mut time = Vec::new();
    let mut flux = Vec::new();
    let mut error = Vec::new();
    let mut dropped_rows = 0usize;
    let mut missing_error_cells = 0usize;

    for line in text.lines().skip(1) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() < required_width {
            continue;
        }

        let t = cells[time_idx].trim().parse::<f64>();
        let f = cells[flux_idx].trim().parse::<f64>();
        match (t, f) {
            (Ok(t), Ok(f)) => {
                time.push(t);
                flux.push(f);
                if let Some(e_idx) = error_idx {
                    if e_idx < cells.len() {
                        // unparseable uncertainty cells degrade to 0, not a drop
                        error.push(cells[e_idx].trim().parse::<f64>().unwrap_or(0.0));
                    } else {
                        missing_error_cells += 1;
                    }
                }
            }
            _ => dropped_rows += 1,
        }
    }

    if dropped_rows > 0 {
        log::debug!("dropped {} rows with non-numeric time/flux", dropped_rows);
    }

    if time.is_empty() {
        return Ok(ParseOutcome::Empty);
    }

    // The uncertainty series is kept only when every contributing row carried
    // its cell; partial coverage cannot be paired back to measurements.
    let error = if error.is_empty() || error.len() != time.len() {
        if missing_error_cells > 0 {
            log::debug!(
                "uncertainty cell missing on {} rows; dropping the series",
                missing_error_cells
            );
        }
        None
    } else {
        Some(error)
    };

    let mut meta = CurveMetadata::new(metadata::infer_mission(&headers.join(",")));
    meta.target_id = metadata::scan_catalog_id(text);
    meta.campaign = metadata::scan_campaign(text);
    meta.sector = metadata::scan_sector(text);

    let curve = LightCurve::new(time, flux, error, meta)?;
    Ok(ParseOutcome::Curve(curve))
}

/// First header index matching any keyword, trying keywords in listed order.
fn find_column(headers: &[String], keys: &[&str]) -> Option<usize> {
    for key in keys {
        if let Some(idx) = headers.iter().position(|h| h == key) {
            return Some(idx);
        }
    }
    None
}
