//! Feature extraction and transit scoring.
//!
//! The predictor presents a model-style interface (load once, then score),
//! but the probability is a calibrated heuristic blend of signal statistics.
//! The fixed-length feature vector is computed and threaded through the model
//! seam so a trained model can replace the heuristic without touching
//! callers.

pub mod features;
pub mod predictor;
pub mod stats;

pub use features::{feature_vector, normalize_unit, signal_scores, SignalScores, FEATURE_VECTOR_LEN};
pub use predictor::TransitPredictor;
