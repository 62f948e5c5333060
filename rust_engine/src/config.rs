//! Engine configuration file support.
//!
//! This module provides utilities for reading engine settings from TOML
//! configuration files. The built-in defaults reproduce the calibrated
//! constants the scorer and validator ship with; a config file only needs to
//! name the values it overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Scoring weights and model-load behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_variation_weight")]
    pub variation_weight: f64,
    #[serde(default = "default_periodicity_weight")]
    pub periodicity_weight: f64,
    #[serde(default = "default_quality_weight")]
    pub quality_weight: f64,
    /// Half-width of the uniform noise term added to the blended probability.
    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude: f64,
    /// Duration of the simulated model load, in milliseconds.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

/// Plausibility thresholds used by the curve validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_min_time_span")]
    pub min_time_span: f64,
    #[serde(default = "default_max_time_span")]
    pub max_time_span: f64,
    #[serde(default = "default_min_mean_flux")]
    pub min_mean_flux: f64,
    #[serde(default = "default_max_mean_flux")]
    pub max_mean_flux: f64,
    /// Curves whose (max - min) / mean flux exceeds this ratio are rejected.
    /// The bound is exclusive: a ratio of exactly this value passes.
    #[serde(default = "default_max_variation_ratio")]
    pub max_variation_ratio: f64,
}

fn default_variation_weight() -> f64 {
    0.4
}

fn default_periodicity_weight() -> f64 {
    0.3
}

fn default_quality_weight() -> f64 {
    0.3
}

fn default_noise_amplitude() -> f64 {
    0.05
}

fn default_load_delay_ms() -> u64 {
    500
}

fn default_min_time_span() -> f64 {
    0.001
}

fn default_max_time_span() -> f64 {
    100_000.0
}

fn default_min_mean_flux() -> f64 {
    0.01
}

fn default_max_mean_flux() -> f64 {
    100.0
}

fn default_max_variation_ratio() -> f64 {
    10.0
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            variation_weight: default_variation_weight(),
            periodicity_weight: default_periodicity_weight(),
            quality_weight: default_quality_weight(),
            noise_amplitude: default_noise_amplitude(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_time_span: default_min_time_span(),
            max_time_span: default_max_time_span(),
            min_mean_flux: default_min_mean_flux(),
            max_mean_flux: default_max_mean_flux(),
            max_variation_ratio: default_max_variation_ratio(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse engine configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        Ok(config)
    }
}
