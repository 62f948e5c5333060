//! Synthetic placeholder light curve used by fallback paths.
//!
//! The binary parser stub and the lossy CSV compatibility path both return
//! this series so downstream consumers always receive a structurally valid
//! curve. The shape is a quiet Kepler-like target: flat baseline with a
//! periodic box-shaped transit dip and small uniform noise.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{CurveMetadata, LightCurve, MissionSource};

/// Number of points in the placeholder series.
pub const MOCK_POINTS: usize = 50_000;
/// Spacing between consecutive samples, in days.
pub const MOCK_CADENCE: f64 = 0.02;
/// Epoch offset of the first sample (Kepler BJD reference epoch).
pub const MOCK_EPOCH: f64 = 2_454_833.0;
/// Target tag attached to placeholder curves.
pub const MOCK_TARGET_ID: &str = "mock_target";

const TRANSIT_PERIOD: f64 = 10.0;
const TRANSIT_DUTY_CYCLE: f64 = 0.1;
const TRANSIT_DEPTH: f64 = 0.01;
const FLUX_JITTER: f64 = 0.001;

/// Generate the placeholder series.
///
/// With `seed` set the output is fully reproducible; without it each call
/// draws fresh entropy, matching the historical non-reproducible behavior.
pub fn mock_curve(seed: Option<u64>) -> LightCurve {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut time = Vec::with_capacity(MOCK_POINTS);
    let mut flux = Vec::with_capacity(MOCK_POINTS);
    let mut error = Vec::with_capacity(MOCK_POINTS);

    for i in 0..MOCK_POINTS {
        let elapsed = i as f64 * MOCK_CADENCE;
        let in_transit = elapsed % TRANSIT_PERIOD < TRANSIT_PERIOD * TRANSIT_DUTY_CYCLE;
        let dip = if in_transit { TRANSIT_DEPTH } else { 0.0 };

        time.push(MOCK_EPOCH + elapsed);
        flux.push(1.0 - dip + rng.gen_range(-FLUX_JITTER..FLUX_JITTER));
        error.push(rng.gen_range(0.0..FLUX_JITTER));
    }

    let mut metadata = CurveMetadata::new(MissionSource::Kepler);
    metadata.target_id = Some(MOCK_TARGET_ID.to_string());

    LightCurve::new(time, flux, Some(error), metadata)
        .expect("series lengths match by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shape() {
        let curve = mock_curve(Some(7));
        assert_eq!(curve.len(), MOCK_POINTS);
        assert_eq!(curve.metadata.source, MissionSource::Kepler);
        assert_eq!(curve.metadata.target_id.as_deref(), Some(MOCK_TARGET_ID));
        assert!((curve.time_span() - (MOCK_POINTS - 1) as f64 * MOCK_CADENCE).abs() < 1e-9);
    }

    #[test]
    fn test_mock_seeded_determinism() {
        let a = mock_curve(Some(99));
        let b = mock_curve(Some(99));
        assert_eq!(a.flux(), b.flux());
        assert_eq!(a.error(), b.error());
    }

    #[test]
    fn test_mock_transit_dip_present() {
        let curve = mock_curve(Some(3));
        // first sample sits inside a transit window, mid-period samples outside
        assert!(curve.flux()[0] < 0.995);
        let mid = (TRANSIT_PERIOD / 2.0 / MOCK_CADENCE) as usize;
        assert!(curve.flux()[mid] > 0.995);
    }

    #[test]
    fn test_mock_error_magnitudes() {
        let curve = mock_curve(Some(5));
        let errors = curve.error().unwrap();
        assert!(errors.iter().all(|&e| (0.0..FLUX_JITTER).contains(&e)));
    }
}
