//! Light-curve validation with detailed error and warning reporting.
//!
//! This module checks parsed curves for basic physical plausibility before
//! they reach the scorer. It is a coarse gate on summary quantities, not a
//! statistical test: curves that pass may still be junk, but curves that fail
//! are certainly not usable photometry.

use serde::{Deserialize, Serialize};

use crate::config::ValidationSettings;
use crate::models::LightCurve;
use crate::scoring::stats;

/// Validation result with categorized issues and summary statistics.
///
/// Errors make `is_valid` false; warnings are informational and don't fail
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary quantities computed during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub num_points: usize,
    pub time_span: f64,
    pub mean_flux: f64,
    /// `(max(flux) - min(flux)) / mean(flux)`
    pub variation_ratio: f64,
    pub has_uncertainties: bool,
}

impl ValidationResult {
    /// A fresh result with valid status and empty issue lists.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Plausibility validator for parsed light curves.
pub struct CurveValidator;

impl CurveValidator {
    /// Boolean plausibility gate with the calibrated default thresholds.
    ///
    /// Fails when the time or flux series is empty, the series lengths
    /// differ, the time span falls outside [0.001, 100000], the mean flux
    /// falls outside [0.01, 100], or the flux variation ratio
    /// `(max - min) / mean` exceeds 10. A ratio of exactly 10 passes.
    pub fn validate(curve: &LightCurve) -> bool {
        Self::validate_detailed(curve).is_valid
    }

    /// Full validation report with the default thresholds.
    pub fn validate_detailed(curve: &LightCurve) -> ValidationResult {
        Self::validate_with(curve, &ValidationSettings::default())
    }

    /// Full validation report against explicit thresholds.
    pub fn validate_with(curve: &LightCurve, settings: &ValidationSettings) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.num_points = curve.len();
        result.stats.has_uncertainties = curve.error().is_some();

        if curve.time().is_empty() || curve.flux().is_empty() {
            result.add_error("light curve has no measurements".to_string());
            return result;
        }

        // enforced at construction; re-checked so hand-built curves from
        // deserialization cannot slip through
        if curve.time().len() != curve.flux().len() {
            result.add_error(format!(
                "time/flux length mismatch: {} vs {}",
                curve.time().len(),
                curve.flux().len()
            ));
            return result;
        }

        let time_span = curve.time_span();
        result.stats.time_span = time_span;
        if time_span < settings.min_time_span || time_span > settings.max_time_span {
            result.add_error(format!(
                "implausible time span {} (expected {} to {})",
                time_span, settings.min_time_span, settings.max_time_span
            ));
        }

        let mean_flux = stats::mean(curve.flux());
        result.stats.mean_flux = mean_flux;
        if mean_flux < settings.min_mean_flux || mean_flux > settings.max_mean_flux {
            result.add_error(format!(
                "implausible mean flux {} (expected {} to {})",
                mean_flux, settings.min_mean_flux, settings.max_mean_flux
            ));
        }

        if let Some((min_flux, max_flux)) = stats::min_max(curve.flux()) {
            let variation_ratio = if mean_flux != 0.0 {
                (max_flux - min_flux) / mean_flux
            } else {
                f64::INFINITY
            };
            result.stats.variation_ratio = variation_ratio;
            if variation_ratio > settings.max_variation_ratio {
                result.add_error(format!(
                    "flux variation ratio {} exceeds {}",
                    variation_ratio, settings.max_variation_ratio
                ));
            }
        }

        if curve.time().windows(2).any(|w| w[1] < w[0]) {
            result.add_warning("time values are not monotonically increasing".to_string());
        }
        if curve.error().is_none() {
            result.add_warning("no per-point uncertainties supplied".to_string());
        }

        result
    }
}
