//! Provenance sniffing shared by the parsers.
//!
//! Mission tags are inferred from header text; catalog identifiers and
//! campaign/sector tags are scanned out of the raw, unsplit input so they are
//! found even when they only appear in comment lines.

use crate::models::MissionSource;

/// Catalog identifier prefixes, tried at each position in scan order.
const CATALOG_PREFIXES: &[&str] = &["kic", "epic", "tic"];

/// Infer the source mission from lower-cased header text.
pub fn infer_mission(header_text: &str) -> MissionSource {
    if header_text.contains("kepler") || header_text.contains("kic") {
        MissionSource::Kepler
    } else if header_text.contains("k2") || header_text.contains("epic") {
        MissionSource::K2
    } else if header_text.contains("tess") || header_text.contains("tic") {
        MissionSource::Tess
    } else {
        MissionSource::Unknown
    }
}

/// Extract a catalog number (KIC/EPIC/TIC) from raw input text.
///
/// Case-insensitive: a prefix followed by optional whitespace and a run of
/// digits. The first match by position wins and the digits are captured
/// verbatim.
pub fn scan_catalog_id(raw: &str) -> Option<String> {
    scan_prefixed_digits(raw, CATALOG_PREFIXES)
}

/// Extract a `campaign <digits>` tag (K2 campaigns) from raw input text.
pub fn scan_campaign(raw: &str) -> Option<String> {
    scan_prefixed_digits(raw, &["campaign"])
}

/// Extract a `sector <digits>` tag (TESS sectors) from raw input text.
pub fn scan_sector(raw: &str) -> Option<String> {
    scan_prefixed_digits(raw, &["sector"])
}

/// Scan for any of `prefixes` followed by optional whitespace and digits.
///
/// A prefix occurrence without trailing digits does not match; scanning
/// continues from the next position, mirroring regex alternation.
fn scan_prefixed_digits(raw: &str, prefixes: &[&str]) -> Option<String> {
    let lower = raw.to_lowercase();
    let bytes = lower.as_bytes();

    for start in 0..bytes.len() {
        for prefix in prefixes {
            if !bytes[start..].starts_with(prefix.as_bytes()) {
                continue;
            }

            let mut i = start + prefix.len();
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            let digit_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i > digit_start {
                return Some(lower[digit_start..i].to_string());
            }
        }
    }

    None
}
