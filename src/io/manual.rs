use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use tracing::{info, warn};

use crate::analysis::types::{OptionRecord, OptionType};
use crate::error::{AnalysisError, Result};

/// Which quote the entered premium was taken from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PremiumSource {
    Bid,
    Ask,
    #[default]
    Mark,
}

impl PremiumSource {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bid" => Some(Self::Bid),
            "ask" => Some(Self::Ask),
            "mark" | "mid" => Some(Self::Mark),
            _ => None,
        }
    }
}

impl fmt::Display for PremiumSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bid => "Bid",
            Self::Ask => "Ask",
            Self::Mark => "Mark",
        };
        f.write_str(s)
    }
}

/// A single hand-entered position
#[derive(Debug, Clone)]
pub struct ManualEntry {
    pub ticker: String,
    pub expiry: NaiveDate,
    pub option_type: OptionType,
    pub premium_source: PremiumSource,
    pub premium: f64,
    pub strike: f64,
    pub iv: f64,
    pub hv: f64,
}

impl ManualEntry {
    /// Validate and convert into a record.
    ///
    /// With `validate_expiry` set, an expiry before `today` is rejected.
    pub fn into_record(self, today: NaiveDate, validate_expiry: bool) -> Result<OptionRecord> {
        if validate_expiry && self.expiry < today {
            warn!(expiry = %self.expiry, %today, "rejecting expired entry");
            return Err(AnalysisError::ExpiryInPast {
                expiry: self.expiry,
                today,
            });
        }

        info!(
            ticker = %self.ticker,
            premium_source = %self.premium_source,
            "manual entry"
        );
        OptionRecord::new(
            &self.ticker,
            self.expiry,
            self.option_type,
            self.premium,
            self.strike,
            self.iv,
            self.hv,
        )
    }
}
