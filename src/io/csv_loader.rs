// src/io/csv_loader.rs

//! Load option records from delimited text.
//!
//! The header row must contain every column in [`REQUIRED_COLUMNS`]; any other
//! columns (for instance derived columns from a previous export) are ignored.
//! A single bad field aborts the whole load.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::analysis::types::{OptionRecord, OptionType};
use crate::error::{AnalysisError, Result};

/// Columns every tabular input must provide.
pub const REQUIRED_COLUMNS: [&str; 7] =
    ["Ticker", "Expiry", "Type", "Premium", "Strike", "IV", "HV"];

/// Date layouts accepted for the Expiry column.
const EXPIRY_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Position of each required column in the header row
struct ColumnIndex {
    ticker: usize,
    expiry: usize,
    option_type: usize,
    premium: usize,
    strike: usize,
    iv: usize,
    hv: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        let position = |name: &str| names.iter().position(|h| *h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&c| position(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            warn!(?missing, "rejecting input with missing columns");
            return Err(AnalysisError::MissingColumns { missing });
        }

        let idx = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            ticker: idx("Ticker"),
            expiry: idx("Expiry"),
            option_type: idx("Type"),
            premium: idx("Premium"),
            strike: idx("Strike"),
            iv: idx("IV"),
            hv: idx("HV"),
        })
    }

    fn parse_row(&self, row: usize, raw: &StringRecord) -> Result<OptionRecord> {
        let field = |i: usize| raw.get(i).unwrap_or("");

        let expiry_raw = field(self.expiry);
        let expiry = parse_expiry(expiry_raw).ok_or_else(|| {
            parse_error(row, "Expiry", expiry_raw, "expected a calendar date such as 2025-01-17")
        })?;

        let type_raw = field(self.option_type);
        let option_type = OptionType::parse(type_raw)
            .ok_or_else(|| parse_error(row, "Type", type_raw, "expected Call or Put"))?;

        OptionRecord::at_row(
            row,
            field(self.ticker),
            expiry,
            option_type,
            parse_number(row, "Premium", field(self.premium))?,
            parse_number(row, "Strike", field(self.strike))?,
            parse_number(row, "IV", field(self.iv))?,
            parse_number(row, "HV", field(self.hv))?,
        )
    }
}

/// Parse an Expiry cell. A date-time is accepted and truncated to its date.
pub fn parse_expiry(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = s.split(['T', ' ']).next().unwrap_or(s);
    EXPIRY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

fn parse_number(row: usize, column: &str, s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| parse_error(row, column, s, &e.to_string()))
}

fn parse_error(row: usize, column: &str, value: &str, reason: &str) -> AnalysisError {
    AnalysisError::Parse {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Read every record from `reader`. Row numbers in errors are 1-based and
/// count data rows only.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<OptionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let raw = result?;
        records.push(columns.parse_row(i + 1, &raw)?);
    }

    info!(records = records.len(), "loaded option records");
    Ok(records)
}

pub fn load_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<OptionRecord>> {
    let file = std::fs::File::open(path)?;
    load_records(file)
}
