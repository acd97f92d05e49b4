use serde::Deserialize;
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Sampling settings for the expiration profit/loss curve
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayoffConfig {
    /// Number of evenly spaced spot prices, both endpoints included
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Lower end of the spot range as a multiple of strike
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,
    /// Upper end of the spot range as a multiple of strike
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
        }
    }
}

/// Main configuration for an analysis pass
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// Grade cut-off separating rich premiums from thin ones
    #[serde(default = "default_grade_threshold")]
    pub grade_threshold: f64,

    #[serde(default)]
    pub payoff: PayoffConfig,

    /// Reject records whose expiry is before today.
    /// Only manual entry honours this; bulk loads are never re-validated.
    #[serde(default)]
    pub validate_expiry: bool,

    /// Decimal places used by the display table
    #[serde(default = "default_display_decimals")]
    pub display_decimals: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            grade_threshold: default_grade_threshold(),
            payoff: PayoffConfig::default(),
            validate_expiry: false,
            display_decimals: default_display_decimals(),
        }
    }
}

impl AnalysisConfig {
    /// Default settings: threshold 10, 100-point curve over [0.8K, 1.2K]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Settings for a single hand-entered record; past expiries are rejected
    pub fn interactive() -> Self {
        Self {
            validate_expiry: true,
            ..Self::default()
        }
    }

    /// Settings for tabular loads
    pub fn bulk() -> Self {
        Self {
            validate_expiry: false,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| AnalysisError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.grade_threshold.is_finite() {
            return Err(AnalysisError::Config(format!(
                "grade_threshold must be finite, got {}",
                self.grade_threshold
            )));
        }
        if self.payoff.samples < 2 {
            return Err(AnalysisError::Config(format!(
                "payoff.samples must be at least 2, got {}",
                self.payoff.samples
            )));
        }
        let (lo, hi) = (self.payoff.lower_factor, self.payoff.upper_factor);
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || lo >= hi {
            return Err(AnalysisError::Config(format!(
                "payoff range factors must satisfy 0 <= lower < upper, got [{}, {}]",
                lo, hi
            )));
        }
        Ok(())
    }
}

fn default_grade_threshold() -> f64 {
    10.0
}

fn default_samples() -> usize {
    100
}

fn default_lower_factor() -> f64 {
    0.8
}

fn default_upper_factor() -> f64 {
    1.2
}

fn default_display_decimals() -> usize {
    2
}
