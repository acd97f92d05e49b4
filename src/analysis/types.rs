use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::{AnalysisError, Result};
use crate::models::grader::{EmphasisTier, Recommendation};

/// Option type of a single-leg position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Case-insensitive parse of "Call"/"Put" (also accepts "C"/"P").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CALL" | "C" => Some(Self::Call),
            "PUT" | "P" => Some(Self::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated single-leg option position.
///
/// Fields are private so that the invariants established by
/// [`OptionRecord::new`] hold for the lifetime of the value:
/// the ticker is non-empty and uppercase, `strike > 0`, and premium, IV and HV
/// are finite and non-negative. The Grader relies on `strike > 0` and never
/// re-checks it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionRecord {
    ticker: String,
    expiry: NaiveDate,
    option_type: OptionType,
    premium: f64,
    strike: f64,
    iv: f64,
    hv: f64,
}

impl OptionRecord {
    /// Build a record, validating every numeric field.
    ///
    /// Errors are reported against row 1; bulk loaders use [`OptionRecord::at_row`]
    /// so the message names the offending data row.
    pub fn new(
        ticker: &str,
        expiry: NaiveDate,
        option_type: OptionType,
        premium: f64,
        strike: f64,
        iv: f64,
        hv: f64,
    ) -> Result<Self> {
        Self::at_row(1, ticker, expiry, option_type, premium, strike, iv, hv)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn at_row(
        row: usize,
        ticker: &str,
        expiry: NaiveDate,
        option_type: OptionType,
        premium: f64,
        strike: f64,
        iv: f64,
        hv: f64,
    ) -> Result<Self> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(AnalysisError::EmptyTicker { row });
        }

        if !strike.is_finite() || strike <= 0.0 {
            return Err(invalid(row, "Strike", strike, "strike must be positive"));
        }
        for (column, value) in [("Premium", premium), ("IV", iv), ("HV", hv)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(row, column, value, "must be a non-negative number"));
            }
        }

        Ok(Self {
            ticker,
            expiry,
            option_type,
            premium,
            strike,
            iv,
            hv,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Per-share option price.
    pub fn premium(&self) -> f64 {
        self.premium
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Implied volatility in percent.
    pub fn iv(&self) -> f64 {
        self.iv
    }

    /// Historical volatility in percent.
    pub fn hv(&self) -> f64 {
        self.hv
    }
}

fn invalid(row: usize, column: &str, value: f64, reason: &str) -> AnalysisError {
    AnalysisError::InvalidField {
        row,
        column: column.to_string(),
        value,
        reason: reason.to_string(),
    }
}

/// Fields derived for one record during an analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFields {
    /// Premium as a percentage of strike
    pub grade: f64,
    /// Mean IV of the batch the record was analysed in
    pub mean_iv: f64,
    pub break_even: f64,
    pub recommendation: Recommendation,
    /// Human label for `recommendation`, specific to the option type
    pub label: String,
    pub emphasis: EmphasisTier,
}

/// A record together with the fields derived for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedRecord {
    pub record: OptionRecord,
    pub derived: DerivedFields,
}

/// Result of one analysis pass over a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Analysed records in input order
    pub records: Vec<AnalyzedRecord>,
    /// Batch mean IV; `None` for an empty batch
    pub mean_iv: Option<f64>,
    /// Grade cut-off the recommendations were computed with
    pub grade_threshold: f64,
}

impl AnalysisReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by ticker (first match).
    pub fn find(&self, ticker: &str) -> Option<&AnalyzedRecord> {
        let ticker = ticker.to_uppercase();
        self.records.iter().find(|r| r.record.ticker() == ticker)
    }
}
