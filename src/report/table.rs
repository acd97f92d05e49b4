use serde::Serialize;

use crate::analysis::types::{AnalysisReport, AnalyzedRecord};
use crate::models::grader::EmphasisTier;

/// One row of the results table, numbers already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub ticker: String,
    pub expiry: String,
    pub option_type: String,
    pub premium: String,
    pub strike: String,
    pub iv: String,
    pub hv: String,
    pub grade: String,
    pub mean_iv: String,
    pub break_even: String,
    pub recommendation: String,
    pub emphasis: EmphasisTier,
}

impl DisplayRow {
    pub fn from_analyzed(analyzed: &AnalyzedRecord, decimals: usize) -> Self {
        let num = |v: f64| format!("{:.*}", decimals, v);
        let r = &analyzed.record;
        let d = &analyzed.derived;
        Self {
            ticker: r.ticker().to_string(),
            expiry: r.expiry().format("%Y-%m-%d").to_string(),
            option_type: r.option_type().to_string(),
            premium: num(r.premium()),
            strike: num(r.strike()),
            iv: num(r.iv()),
            hv: num(r.hv()),
            grade: num(d.grade),
            mean_iv: num(d.mean_iv),
            break_even: num(d.break_even),
            recommendation: d.label.clone(),
            emphasis: d.emphasis,
        }
    }

    fn cells(&self) -> [&str; 12] {
        [
            &self.ticker,
            &self.expiry,
            &self.option_type,
            &self.premium,
            &self.strike,
            &self.iv,
            &self.hv,
            &self.grade,
            &self.mean_iv,
            &self.break_even,
            &self.recommendation,
            self.emphasis.as_str(),
        ]
    }
}

const HEADER: [&str; 12] = [
    "Ticker", "Expiry", "Type", "Premium", "Strike", "IV", "HV", "Grade", "MeanIV", "BreakEven",
    "Recommendation", "Emphasis",
];

pub fn display_rows(report: &AnalysisReport, decimals: usize) -> Vec<DisplayRow> {
    report
        .records
        .iter()
        .map(|r| DisplayRow::from_analyzed(r, decimals))
        .collect()
}

/// Render rows as a left-aligned plain-text table.
pub fn render_table(rows: &[DisplayRow]) -> String {
    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&HEADER));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&line(&row.cells()));
        out.push('\n');
    }
    out
}
