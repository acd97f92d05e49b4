//! # Option-Analyzer: Single-Leg Option Screening
//!
//! `option-analyzer` scores single-leg option positions (calls or puts) by comparing implied
//! volatility against historical volatility and the batch mean IV, grades the premium as a
//! percentage of strike, and recommends buying, selling or holding off. For any record it can
//! also produce the break-even price and the expiration profit/loss curve.
//!
//! ## Core Features
//!
//! - **Grader**: premium-to-strike grade plus a five-step recommendation priority chain
//! - **Payoff model**: break-even and a lazily evaluated P/L curve over `[0.8K, 1.2K]`
//! - **Tabular IO**: CSV loading with strict column/field validation and CSV export
//! - **Presentation helpers**: 2-decimal display rows, emphasis tiers and SVG payoff charts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use option_analyzer::{analyze_csv, default_configs, export_csv, payoff_for};
//!
//! let input = std::fs::File::open("options.csv")?;
//! let config = default_configs::bulk();
//!
//! let report = analyze_csv(input, &config)?;
//! for row in &report.records {
//!     println!("{} grade={:.2} -> {}", row.record.ticker(), row.derived.grade, row.derived.label);
//! }
//!
//! let profile = payoff_for(&report.records[0].record, &config)?;
//! println!("break-even: {:.2}", profile.break_even);
//!
//! export_csv(&report, std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `standard()`: grade threshold 10, 100-point payoff curve
//! - `interactive()`: as standard, and hand-entered expiries must not be in the past
//! - `bulk()`: as standard, for tabular loads (expiries are not re-validated)

// ================================================================================================
// MODULES
// ================================================================================================

pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod report;

// ================================================================================================
// IMPORTS
// ================================================================================================

use std::io::{Read, Write};

use crate::analysis::pipeline::AnalysisPass;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core types and configuration
pub use analysis::{
    config::{AnalysisConfig, PayoffConfig},
    types::{AnalysisReport, AnalyzedRecord, DerivedFields, OptionRecord, OptionType},
};
pub use error::{AnalysisError, Result};

// Rule engine and payoff model
pub use models::grader::{classify, grade, rules_help, EmphasisTier, Recommendation, Signals};
pub use models::payoff::{break_even, profit_at, PayoffProfile, ProfitLossCurve};

// Input boundaries
pub use io::{ManualEntry, PremiumSource, REQUIRED_COLUMNS};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured analysis settings.
///
/// # Available Configurations
///
/// - [`standard()`]: default thresholds and curve sampling
/// - [`interactive()`]: for a single hand-entered record
/// - [`bulk()`]: for records loaded from a file
pub mod default_configs {
    use crate::analysis::config::AnalysisConfig;

    /// Grade threshold 10, payoff curve of 100 points over `[0.8K, 1.2K]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_analyzer::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.grade_threshold, 10.0);
    /// assert_eq!(config.payoff.samples, 100);
    /// ```
    pub fn standard() -> AnalysisConfig {
        AnalysisConfig::standard()
    }

    /// Standard settings with expiry validation switched on.
    ///
    /// **Use Cases:**
    /// - Form-style entry of one position
    /// - Command-line `manual` analysis
    pub fn interactive() -> AnalysisConfig {
        AnalysisConfig::interactive()
    }

    /// Standard settings for tabular loads; expiries are taken as given.
    pub fn bulk() -> AnalysisConfig {
        AnalysisConfig::bulk()
    }
}

/// Run one analysis pass over an already validated batch.
///
/// MeanIV is computed once over `records`, then every record is graded and
/// classified against it. The result lists records in input order. An empty
/// batch yields an empty report with `mean_iv == None`.
///
/// # Errors
///
/// * [`AnalysisError::Config`] if `config` fails [`AnalysisConfig::validate`]
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use option_analyzer::{analyze_batch, default_configs, OptionRecord, OptionType, Recommendation};
///
/// let expiry = NaiveDate::from_ymd_opt(2030, 1, 18).unwrap();
/// let record = OptionRecord::new("aapl", expiry, OptionType::Call, 5.0, 150.0, 20.0, 15.0)?;
///
/// let report = analyze_batch(vec![record], &default_configs::standard())?;
/// assert_eq!(report.records[0].derived.recommendation, Recommendation::AvoidSell);
/// assert_eq!(report.records[0].record.ticker(), "AAPL");
/// # Ok::<(), option_analyzer::AnalysisError>(())
/// ```
pub fn analyze_batch(
    records: Vec<OptionRecord>,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    config.validate()?;
    Ok(AnalysisPass::new(config.clone(), records).run())
}

/// Load a CSV batch and analyse it.
///
/// The header must contain `Ticker, Expiry, Type, Premium, Strike, IV, HV`.
/// Any load error aborts the pass; no partial report is produced.
///
/// # Errors
///
/// * [`AnalysisError::MissingColumns`] when a required column is absent
/// * [`AnalysisError::Parse`] when a date, type or number cannot be parsed
/// * [`AnalysisError::InvalidField`] when Strike <= 0 or Premium/IV/HV is negative
pub fn analyze_csv<R: Read>(reader: R, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let records = io::load_records(reader)?;
    analyze_batch(records, config)
}

/// Analyse a single hand-entered position.
///
/// Expiry validation follows `config.validate_expiry`; `today` is passed in so
/// the call stays deterministic.
pub fn analyze_manual(
    entry: ManualEntry,
    today: chrono::NaiveDate,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    let record = entry.into_record(today, config.validate_expiry)?;
    analyze_batch(vec![record], config)
}

/// Break-even and sampled P/L curve for one record.
///
/// # Errors
///
/// * [`AnalysisError::Config`] if `config` fails [`AnalysisConfig::validate`],
///   e.g. fewer than two samples or an inverted spot range
pub fn payoff_for(record: &OptionRecord, config: &AnalysisConfig) -> Result<PayoffProfile> {
    config.validate()?;
    Ok(PayoffProfile::build(record, &config.payoff))
}

/// Serialise a report as comma-separated UTF-8 text with a header row.
pub fn export_csv<W: Write>(report: &AnalysisReport, writer: W) -> Result<()> {
    io::write_report(report, writer)
}
