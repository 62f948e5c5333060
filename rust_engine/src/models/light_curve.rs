//! Normalized light-curve record and provenance metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, Result};

/// Mission that produced a light curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionSource {
    Kepler,
    K2,
    Tess,
    #[default]
    Unknown,
}

impl fmt::Display for MissionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissionSource::Kepler => "kepler",
            MissionSource::K2 => "k2",
            MissionSource::Tess => "tess",
            MissionSource::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Provenance metadata attached to a parsed light curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveMetadata {
    pub source: MissionSource,
    /// Catalog number (KIC/EPIC/TIC digits) captured verbatim from the input.
    pub target_id: Option<String>,
    pub campaign: Option<String>,
    pub sector: Option<String>,
    /// SHA-256 digest of the raw input, filled by the loader layer.
    pub checksum: Option<String>,
    pub ingested_at: DateTime<Utc>,
}

impl CurveMetadata {
    pub fn new(source: MissionSource) -> Self {
        Self {
            source,
            target_id: None,
            campaign: None,
            sector: None,
            checksum: None,
            ingested_at: Utc::now(),
        }
    }
}

impl Default for CurveMetadata {
    fn default() -> Self {
        Self::new(MissionSource::Unknown)
    }
}

/// Time-ordered brightness measurements of a single target.
///
/// The series are parallel-indexed: `time[i]`, `flux[i]`, and (when present)
/// `error[i]` describe the same measurement. Construction enforces the length
/// invariants; the vectors are not mutable afterwards, parsers own the only
/// mutation phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightCurve {
    time: Vec<f64>,
    flux: Vec<f64>,
    error: Option<Vec<f64>>,
    pub metadata: CurveMetadata,
}

impl LightCurve {
    /// Build a light curve, enforcing `time.len() == flux.len()` and, when an
    /// error series is present, `error.len() == time.len()`.
    pub fn new(
        time: Vec<f64>,
        flux: Vec<f64>,
        error: Option<Vec<f64>>,
        metadata: CurveMetadata,
    ) -> Result<Self> {
        if time.len() != flux.len() {
            return Err(EngineError::LengthMismatch {
                time_len: time.len(),
                flux_len: flux.len(),
            });
        }
        if let Some(ref err) = error {
            if err.len() != time.len() {
                return Err(EngineError::LengthMismatch {
                    time_len: time.len(),
                    flux_len: err.len(),
                });
            }
        }
        Ok(Self {
            time,
            flux,
            error,
            metadata,
        })
    }

    /// An empty curve with the given source tag.
    pub fn empty(source: MissionSource) -> Self {
        Self {
            time: Vec::new(),
            flux: Vec::new(),
            error: None,
            metadata: CurveMetadata::new(source),
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    pub fn error(&self) -> Option<&[f64]> {
        self.error.as_deref()
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `max(time) - min(time)`, or 0 for curves with fewer than two points.
    ///
    /// Time is assumed roughly monotonic but this does not rely on ordering.
    pub fn time_span(&self) -> f64 {
        if self.time.len() < 2 {
            return 0.0;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &t in &self.time {
            if t < min {
                min = t;
            }
            if t > max {
                max = t;
            }
        }
        max - min
    }
}
