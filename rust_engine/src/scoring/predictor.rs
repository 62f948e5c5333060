//! Transit predictor with a one-time initialization gate.
//!
//! The predictor mimics a loaded-model service: callers run `ensure_ready`
//! (or just `score`, which does it for them) and concurrent first callers
//! share a single in-flight load instead of racing redundant ones. The load
//! itself is a fixed delay standing in for a real model-load step.

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::ScoringSettings;
use crate::error::Result;
use crate::models::{LightCurve, Prediction};
use crate::scoring::features;

type LoadHandle = Shared<BoxFuture<'static, ()>>;

/// Probability range of the fallback prediction on scoring failure.
const FALLBACK_RANGE: std::ops::Range<f64> = 0.7..0.95;

/// Heuristic transit scorer behind a model-style interface.
pub struct TransitPredictor {
    ready: AtomicBool,
    pending: Mutex<Option<LoadHandle>>,
    load_count: Arc<AtomicUsize>,
    rng: Mutex<ChaCha8Rng>,
    settings: ScoringSettings,
}

impl TransitPredictor {
    pub fn new() -> Self {
        Self::with_settings(ScoringSettings::default())
    }

    pub fn with_settings(settings: ScoringSettings) -> Self {
        Self {
            ready: AtomicBool::new(false),
            pending: Mutex::new(None),
            load_count: Arc::new(AtomicUsize::new(0)),
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
            settings,
        }
    }

    /// Fix the noise RNG seed, for reproducible scoring in tests.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Idempotent initialization.
    ///
    /// The first caller starts the simulated load; concurrent callers await
    /// the same in-flight handle; callers after completion return
    /// immediately. Completion always resolves to ready; a failed load
    /// degrades to ready rather than blocking scoring.
    pub async fn ensure_ready(&self) {
        if self.ready.load(Ordering::Acquire) {
            return;
        }

        let load = {
            let mut pending = self.pending.lock();
            if self.ready.load(Ordering::Acquire) {
                return;
            }
            match pending.as_ref() {
                Some(load) => load.clone(),
                None => {
                    let load = self.spawn_load();
                    *pending = Some(load.clone());
                    load
                }
            }
        };

        load.await;
        self.ready.store(true, Ordering::Release);
        self.pending.lock().take();
    }

    fn spawn_load(&self) -> LoadHandle {
        let count = self.load_count.clone();
        let delay = Duration::from_millis(self.settings.load_delay_ms);
        async move {
            count.fetch_add(1, Ordering::SeqCst);
            // stand-in for a real model load
            tokio::time::sleep(delay).await;
        }
        .boxed()
        .shared()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Clears the ready flag and forgets any in-flight load handle.
    ///
    /// An already-running load is not cancelled; callers awaiting it will
    /// still complete and re-mark the predictor ready.
    pub fn reset(&self) {
        self.ready.store(false, Ordering::Release);
        self.pending.lock().take();
    }

    /// Number of times the simulated load has run. Instrumentation.
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Score a light curve, initializing on first use.
    ///
    /// Never fails: internal scoring errors degrade to a mock prediction
    /// with a logged diagnostic.
    pub async fn score(&self, curve: &LightCurve) -> Prediction {
        self.ensure_ready().await;

        let features = features::feature_vector(curve);
        match self.predict(&features, curve) {
            Ok(prediction) => prediction,
            Err(e) => {
                log::warn!("scoring failed ({}); falling back to mock prediction", e);
                self.fallback_prediction()
            }
        }
    }

    /// Model seam. The padded feature vector is the input surface a trained
    /// model would consume; the interim heuristic ignores it and blends
    /// raw-curve statistics instead.
    fn predict(&self, _features: &[f64], curve: &LightCurve) -> Result<Prediction> {
        let scores = features::signal_scores(curve)?;

        let noise = self.noise();
        let blended = self.settings.variation_weight * scores.variation
            + self.settings.periodicity_weight * scores.periodicity
            + self.settings.quality_weight * scores.quality
            + noise;
        let probability = blended.clamp(0.0, 1.0);
        let confidence = (probability * 1.2).min(1.0);

        log::debug!(
            "scored curve: variation={:.3} periodicity={:.3} quality={:.3} probability={:.3}",
            scores.variation,
            scores.periodicity,
            scores.quality,
            probability
        );

        Ok(Prediction::from_probability(probability, confidence))
    }

    fn noise(&self) -> f64 {
        let amplitude = self.settings.noise_amplitude;
        if amplitude > 0.0 {
            self.rng.lock().gen_range(-amplitude..amplitude)
        } else {
            0.0
        }
    }

    fn fallback_prediction(&self) -> Prediction {
        let probability = self.rng.lock().gen_range(FALLBACK_RANGE);
        Prediction::from_probability(probability, probability * 0.9)
    }
}

impl Default for TransitPredictor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurveMetadata, MissionSource, PlanetType};

    fn quick_settings() -> ScoringSettings {
        ScoringSettings {
            load_delay_ms: 10,
            ..ScoringSettings::default()
        }
    }

    fn flat_curve(n: usize) -> LightCurve {
        let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        LightCurve::new(time, vec![1.0; n], None, CurveMetadata::default()).unwrap()
    }

    #[tokio::test]
    async fn test_score_bounds() {
        let predictor = TransitPredictor::with_settings(quick_settings()).seeded(42);
        let prediction = predictor.score(&flat_curve(500)).await;
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert!((0.0..=1.0).contains(&prediction.confidence));
    }

    #[tokio::test]
    async fn test_score_deterministic_with_seed() {
        let curve = flat_curve(200);
        let a = TransitPredictor::with_settings(quick_settings())
            .seeded(7)
            .score(&curve)
            .await;
        let b = TransitPredictor::with_settings(quick_settings())
            .seeded(7)
            .score(&curve)
            .await;
        assert_eq!(a.probability, b.probability);
        assert_eq!(a.planet_type, b.planet_type);
    }

    #[tokio::test]
    async fn test_zero_noise_is_exact() {
        let settings = ScoringSettings {
            noise_amplitude: 0.0,
            load_delay_ms: 10,
            ..ScoringSettings::default()
        };
        let predictor = TransitPredictor::with_settings(settings);
        let prediction = predictor.score(&flat_curve(100)).await;
        // variation 0, periodicity 0, quality (0.1 + 1 + 1) / 3 = 0.7
        assert!((prediction.probability - 0.21).abs() < 1e-12);
        assert!((prediction.confidence - 0.21 * 1.2).abs() < 1e-12);
        assert_eq!(prediction.planet_type, PlanetType::GasGiant);
    }

    #[tokio::test]
    async fn test_empty_curve_falls_back_to_mock() {
        let predictor = TransitPredictor::with_settings(quick_settings()).seeded(11);
        let empty = LightCurve::empty(MissionSource::Unknown);
        let prediction = predictor.score(&empty).await;
        assert!((0.7..0.95).contains(&prediction.probability));
        assert!((prediction.confidence - prediction.probability * 0.9).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_ready_lifecycle() {
        let predictor = TransitPredictor::with_settings(quick_settings());
        assert!(!predictor.is_ready());

        predictor.ensure_ready().await;
        assert!(predictor.is_ready());
        assert_eq!(predictor.load_count(), 1);

        // subsequent calls are no-ops
        predictor.ensure_ready().await;
        assert_eq!(predictor.load_count(), 1);

        predictor.reset();
        assert!(!predictor.is_ready());
        predictor.ensure_ready().await;
        assert_eq!(predictor.load_count(), 2);
    }
}
