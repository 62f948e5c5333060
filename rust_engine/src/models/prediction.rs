//! Transit prediction record derived from a scored probability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse planet classification by transit probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetType {
    #[serde(rename = "Super Earth")]
    SuperEarth,
    #[serde(rename = "Terrestrial")]
    Terrestrial,
    #[serde(rename = "Mini-Neptune")]
    MiniNeptune,
    #[serde(rename = "Gas Giant")]
    GasGiant,
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanetType::SuperEarth => "Super Earth",
            PlanetType::Terrestrial => "Terrestrial",
            PlanetType::MiniNeptune => "Mini-Neptune",
            PlanetType::GasGiant => "Gas Giant",
        };
        write!(f, "{}", s)
    }
}

impl PlanetType {
    /// Classification thresholds on the transit probability.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.9 {
            PlanetType::SuperEarth
        } else if probability > 0.7 {
            PlanetType::Terrestrial
        } else if probability > 0.5 {
            PlanetType::MiniNeptune
        } else {
            PlanetType::GasGiant
        }
    }
}

/// Scored prediction for a single light curve.
///
/// Entirely derived from the probability at scoring time; predictions carry
/// no identity and are recreated on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub probability: f64,
    pub confidence: f64,
    pub planet_type: PlanetType,
    pub is_habitable: bool,
    pub has_atmosphere: bool,
    pub has_water: bool,
    /// Equilibrium temperature estimate in Kelvin.
    pub temperature: f64,
    /// Planet radius estimate in Earth radii.
    pub radius: f64,
    /// Orbital distance estimate in AU.
    pub distance_from_star: f64,
}

impl Prediction {
    /// Expand a probability/confidence pair into the full prediction record.
    pub fn from_probability(probability: f64, confidence: f64) -> Self {
        Self {
            probability,
            confidence,
            planet_type: PlanetType::from_probability(probability),
            is_habitable: probability > 0.7,
            has_atmosphere: probability > 0.6,
            has_water: probability > 0.8,
            temperature: (200.0 + probability * 200.0).round(),
            radius: 0.5 + probability * 2.5,
            distance_from_star: 0.02 + probability * 0.5,
        }
    }
}
