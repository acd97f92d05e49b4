// src/models/payoff/mod.rs

//! Expiration payoff of a long single-leg option.
//!
//! Profit per share at expiration, ignoring contract multiplier and costs:
//!
//! ```text
//! Call: max(S - K, 0) - premium
//! Put:  max(K - S, 0) - premium
//! ```

use serde::Serialize;

use crate::analysis::config::PayoffConfig;
use crate::analysis::types::{OptionRecord, OptionType};
use crate::models::utils::linspace_point;

/// Spot price at which a long position breaks even at expiration.
pub fn break_even(option_type: OptionType, strike: f64, premium: f64) -> f64 {
    match option_type {
        OptionType::Call => strike + premium,
        OptionType::Put => strike - premium,
    }
}

/// Profit per share at expiration for a given spot.
pub fn profit_at(option_type: OptionType, strike: f64, premium: f64, spot: f64) -> f64 {
    let intrinsic = match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    };
    intrinsic - premium
}

/// Lazily evaluated (spot, profit) curve over `[lower, upper]`.
///
/// The curve is a plain value: calling [`ProfitLossCurve::iter`] again starts
/// over from the first point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitLossCurve {
    option_type: OptionType,
    strike: f64,
    premium: f64,
    lower: f64,
    upper: f64,
    samples: usize,
}

impl ProfitLossCurve {
    /// Curve for `record`, spot range `[lower_factor * K, upper_factor * K]`.
    pub fn for_record(record: &OptionRecord, config: &PayoffConfig) -> Self {
        let strike = record.strike();
        Self {
            option_type: record.option_type(),
            strike,
            premium: record.premium(),
            lower: config.lower_factor * strike,
            upper: config.upper_factor * strike,
            samples: config.samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        (0..self.samples).map(move |i| {
            let spot = linspace_point(self.lower, self.upper, self.samples, i);
            (
                spot,
                profit_at(self.option_type, self.strike, self.premium, spot),
            )
        })
    }

    pub fn to_vec(&self) -> Vec<(f64, f64)> {
        self.iter().collect()
    }
}

/// Materialised payoff for plotting: break-even plus curve points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffProfile {
    pub ticker: String,
    pub option_type: OptionType,
    pub strike: f64,
    pub premium: f64,
    pub break_even: f64,
    pub points: Vec<(f64, f64)>,
}

impl PayoffProfile {
    pub fn build(record: &OptionRecord, config: &PayoffConfig) -> Self {
        let curve = ProfitLossCurve::for_record(record, config);
        Self {
            ticker: record.ticker().to_string(),
            option_type: record.option_type(),
            strike: record.strike(),
            premium: record.premium(),
            break_even: break_even(record.option_type(), record.strike(), record.premium()),
            points: curve.to_vec(),
        }
    }

    /// (min, max) profit over the sampled curve
    pub fn profit_bounds(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let lo = self.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let hi = self
            .points
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((lo, hi))
    }
}
