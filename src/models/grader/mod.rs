// src/models/grader/mod.rs

//! Premium-richness grade and the IV/HV recommendation rules.
//!
//! The grade of a position is its premium as a percentage of strike:
//!
//! ```text
//! Grade = Premium * 100 / Strike
//! ```
//!
//! A recommendation is chosen by testing the following conditions in order;
//! the first match wins:
//!
//! 1. `IV < HV && IV < MeanIV` → [`Recommendation::IdealBuy`]
//! 2. `Grade > threshold && IV > HV` → [`Recommendation::RecommendSell`]
//! 3. `IV < HV` → [`Recommendation::BuyFavorable`]
//! 4. `Grade < threshold` → [`Recommendation::AvoidSell`]
//! 5. otherwise → [`Recommendation::NoClearSignal`]
//!
//! Comparisons are exact. A grade of exactly the threshold, or `IV == HV`,
//! falls through the chain deterministically.

use serde::Serialize;
use std::fmt;

use crate::analysis::types::OptionType;

/// Recommendation category. Calls and puts share categories but render
/// different labels, see [`Recommendation::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Recommendation {
    IdealBuy,
    RecommendSell,
    BuyFavorable,
    AvoidSell,
    NoClearSignal,
}

/// Visual emphasis used by row-level highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmphasisTier {
    Favorable,
    Caution,
    Unfavorable,
    Neutral,
}

impl EmphasisTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Caution => "caution",
            Self::Unfavorable => "unfavorable",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmphasisTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four quantities the rule chain looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub grade: f64,
    pub iv: f64,
    pub hv: f64,
    pub mean_iv: f64,
}

/// Premium as a percentage of strike.
///
/// Callers must ensure `strike > 0`; [`crate::OptionRecord`] guarantees it.
#[inline]
pub fn grade(premium: f64, strike: f64) -> f64 {
    premium * 100.0 / strike
}

/// Run the priority chain described in the module docs.
pub fn classify(signals: &Signals, grade_threshold: f64) -> Recommendation {
    let Signals {
        grade,
        iv,
        hv,
        mean_iv,
    } = *signals;

    if iv < hv && iv < mean_iv {
        Recommendation::IdealBuy
    } else if grade > grade_threshold && iv > hv {
        Recommendation::RecommendSell
    } else if iv < hv {
        Recommendation::BuyFavorable
    } else if grade < grade_threshold {
        Recommendation::AvoidSell
    } else {
        Recommendation::NoClearSignal
    }
}

impl Recommendation {
    pub fn emphasis(&self) -> EmphasisTier {
        match self {
            Self::IdealBuy | Self::BuyFavorable => EmphasisTier::Favorable,
            Self::RecommendSell => EmphasisTier::Caution,
            Self::AvoidSell => EmphasisTier::Unfavorable,
            Self::NoClearSignal => EmphasisTier::Neutral,
        }
    }

    /// Stable identifier, independent of option type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdealBuy => "IdealBuy",
            Self::RecommendSell => "RecommendSell",
            Self::BuyFavorable => "BuyFavorable",
            Self::AvoidSell => "AvoidSell",
            Self::NoClearSignal => "NoClearSignal",
        }
    }

    /// Display label for a given option type.
    pub fn label(&self, option_type: OptionType, grade_threshold: f64) -> String {
        let kind = option_type.as_str();
        match self {
            Self::IdealBuy => format!("Ideal moment: Buy {}", kind),
            Self::RecommendSell => {
                format!("Sell {} (Grade > {} and high IV)", kind, grade_threshold)
            }
            Self::BuyFavorable => format!("Buy {} (IV < HV)", kind),
            Self::AvoidSell => format!("Do not sell {} (Grade < {})", kind, grade_threshold),
            Self::NoClearSignal => format!("No clear recommendation ({})", kind),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain-text explanation of how records are graded.
pub fn rules_help(grade_threshold: f64) -> String {
    format!(
        "How the analysis works:\n\
         - Grade = Premium / Strike x 100\n\
         - IV < HV: volatility is underpriced, buying is favourable\n\
         - IV < HV and IV below the batch mean IV: ideal moment to buy\n\
         - IV > HV and Grade > {t}: rich premium and high volatility, consider selling\n\
         - Grade < {t}: premium too thin to sell\n\
         - Calls and puts are analysed separately",
        t = grade_threshold
    )
}
