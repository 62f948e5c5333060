//! Feature extraction from normalized light curves.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::LightCurve;
use crate::scoring::stats;

/// Fixed length of the model input vector.
pub const FEATURE_VECTOR_LEN: usize = 1000;

/// Number of points a curve needs for full completeness credit.
const COMPLETENESS_BASELINE: f64 = 1000.0;

/// Time deltas larger than this multiple of the median delta count as gaps.
const GAP_FACTOR: f64 = 3.0;

/// Bounded component scores derived from raw curve statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalScores {
    /// Flux scatter, `min(stddev * 10, 1)`.
    pub variation: f64,
    /// Normalized flux swing, `min((max-min)/(max+min) * 2, 1)`.
    pub periodicity: f64,
    /// Mean of completeness, gap quality, and uncertainty quality.
    pub quality: f64,
}

/// Build the fixed-length model input vector.
///
/// Time, flux, and the uncertainty series (or a zero-filled stand-in of
/// matching length) are each min-max normalized to [0, 1] independently,
/// concatenated, then zero-padded or truncated to [`FEATURE_VECTOR_LEN`].
pub fn feature_vector(curve: &LightCurve) -> Vec<f64> {
    let mut features = Vec::with_capacity(FEATURE_VECTOR_LEN.max(3 * curve.len()));
    features.extend(normalize_unit(curve.time()));
    features.extend(normalize_unit(curve.flux()));
    match curve.error() {
        Some(errors) => features.extend(normalize_unit(errors)),
        None => {
            let substitute = vec![0.0; curve.len()];
            features.extend(normalize_unit(&substitute));
        }
    }
    features.resize(FEATURE_VECTOR_LEN, 0.0);
    features
}

/// Min-max normalize to [0, 1]; constant series map to a uniform 0.5 so a
/// zero range never divides.
pub fn normalize_unit(values: &[f64]) -> Vec<f64> {
    match stats::min_max(values) {
        Some((min, max)) if max > min => {
            values.iter().map(|v| (v - min) / (max - min)).collect()
        }
        Some(_) => vec![0.5; values.len()],
        None => Vec::new(),
    }
}

/// Compute the component scores feeding the probability blend.
pub fn signal_scores(curve: &LightCurve) -> Result<SignalScores> {
    if curve.flux().is_empty() {
        return Err(EngineError::InvalidInput(
            "cannot score an empty light curve".into(),
        ));
    }

    let variation = (stats::std_dev(curve.flux()) * 10.0).min(1.0);

    let periodicity = match stats::min_max(curve.flux()) {
        Some((min, max)) if min + max != 0.0 => ((max - min) / (max + min) * 2.0).min(1.0),
        _ => 0.0,
    };

    let completeness = curve.len() as f64 / COMPLETENESS_BASELINE;
    let gap_quality = gap_quality(curve.time());
    let error_quality = match curve.error() {
        None => 1.0,
        Some(errors) => (1.0 - stats::mean(errors) * 100.0).max(0.0),
    };
    let quality = (completeness + gap_quality + error_quality) / 3.0;

    Ok(SignalScores {
        variation,
        periodicity,
        quality,
    })
}

/// Fraction of cadence steps that are not gaps.
///
/// A step counts as a gap when it exceeds [`GAP_FACTOR`] times the median
/// step. Curves with fewer than two points have no steps and score 1.
fn gap_quality(time: &[f64]) -> f64 {
    if time.len() < 2 {
        return 1.0;
    }
    let deltas: Vec<f64> = time.windows(2).map(|w| w[1] - w[0]).collect();
    let median_delta = stats::median(&deltas);
    let gaps = deltas
        .iter()
        .filter(|&&d| d > GAP_FACTOR * median_delta)
        .count();
    1.0 - gaps as f64 / deltas.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurveMetadata, MissionSource};

    fn curve(time: Vec<f64>, flux: Vec<f64>, error: Option<Vec<f64>>) -> LightCurve {
        LightCurve::new(time, flux, error, CurveMetadata::default()).unwrap()
    }

    #[test]
    fn test_normalize_unit_range() {
        let normalized = normalize_unit(&[2.0, 4.0, 6.0]);
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_normalize_unit_constant_series() {
        assert_eq!(normalize_unit(&[7.0, 7.0, 7.0]), vec![0.5, 0.5, 0.5]);
        assert!(normalize_unit(&[]).is_empty());
    }

    #[test]
    fn test_feature_vector_padded() {
        let c = curve(vec![0.0, 1.0], vec![1.0, 2.0], None);
        let features = feature_vector(&c);
        assert_eq!(features.len(), FEATURE_VECTOR_LEN);
        // 2 time + 2 flux + 2 substituted error entries, zero padding after
        assert_eq!(&features[..6], &[0.0, 1.0, 0.0, 1.0, 0.5, 0.5]);
        assert!(features[6..].iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_feature_vector_truncated() {
        let n = 600;
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let flux = vec![1.0; n];
        let c = curve(time, flux, None);
        assert_eq!(feature_vector(&c).len(), FEATURE_VECTOR_LEN);
    }

    #[test]
    fn test_variation_capped() {
        let c = curve(vec![0.0, 1.0], vec![0.0, 10.0], None);
        let scores = signal_scores(&c).unwrap();
        assert_eq!(scores.variation, 1.0);
    }

    #[test]
    fn test_constant_flux_scores() {
        let time: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
        let c = curve(time, vec![1.0; 100], None);
        let scores = signal_scores(&c).unwrap();
        assert_eq!(scores.variation, 0.0);
        assert_eq!(scores.periodicity, 0.0);
        // completeness 0.1, gap quality 1, error quality 1
        assert!((scores.quality - (0.1 + 1.0 + 1.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_periodicity_zero_sum_guard() {
        let c = curve(vec![0.0, 1.0], vec![-1.0, 1.0], None);
        let scores = signal_scores(&c).unwrap();
        assert_eq!(scores.periodicity, 0.0);
    }

    #[test]
    fn test_completeness_uncapped() {
        let n = 2000;
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let c = curve(time, vec![1.0; n], None);
        let scores = signal_scores(&c).unwrap();
        // quality mean can exceed 1 through the uncapped completeness term
        assert!(scores.quality > 1.0);
    }

    #[test]
    fn test_gap_quality_detects_gaps() {
        // uniform cadence 1.0 with one 10-unit gap out of 9 steps
        let time = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 18.0];
        let c = curve(time, vec![1.0; 10], None);
        let scores = signal_scores(&c).unwrap();
        let expected_gap_quality = 1.0 - 1.0 / 9.0;
        let expected = (10.0 / 1000.0 + expected_gap_quality + 1.0) / 3.0;
        assert!((scores.quality - expected).abs() < 1e-12);
    }

    #[test]
    fn test_error_quality_penalizes_noisy_uncertainties() {
        let c = curve(
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            Some(vec![0.02, 0.02]),
        );
        let scores = signal_scores(&c).unwrap();
        // error quality = max(0, 1 - 0.02*100) = 0; completeness 0.002, gaps 1
        assert!((scores.quality - (0.002 + 1.0 + 0.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_curve_rejected() {
        let c = LightCurve::empty(MissionSource::Unknown);
        assert!(signal_scores(&c).is_err());
    }
}
