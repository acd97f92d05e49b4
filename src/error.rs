// src/error.rs

//! Error taxonomy for loading, validating and exporting option records.
//!
//! Every variant is fatal to the pass that raised it: callers never receive a
//! partially analysed batch alongside an error.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or analysing a batch of option records.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Tabular input is missing one or more required columns.
    #[error("input is missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A field could not be parsed into its expected type.
    #[error("row {row}, column {column}: cannot parse {value:?} ({reason})")]
    Parse {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// A field parsed but violates its domain (e.g. Strike <= 0).
    #[error("row {row}, column {column}: invalid value {value} ({reason})")]
    InvalidField {
        row: usize,
        column: String,
        value: f64,
        reason: String,
    },

    /// Interactive entry with an expiry date before the analysis date.
    #[error("expiry {expiry} is in the past (today is {today})")]
    ExpiryInPast { expiry: NaiveDate, today: NaiveDate },

    /// Blank Ticker cell or entry; `row` is 1-based like [`AnalysisError::Parse`].
    #[error("row {row}, column Ticker: ticker must not be empty")]
    EmptyTicker { row: usize },

    #[error("plotting failed: {0}")]
    Plot(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
