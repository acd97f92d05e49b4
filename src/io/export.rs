use csv::WriterBuilder;
use std::io::Write;
use tracing::info;

use crate::analysis::types::AnalysisReport;
use crate::error::Result;

/// Header row of an exported report.
pub const EXPORT_COLUMNS: [&str; 12] = [
    "Ticker",
    "Expiry",
    "Type",
    "Premium",
    "Strike",
    "IV",
    "HV",
    "Grade",
    "MeanIV",
    "BreakEven",
    "Recommendation",
    "Emphasis",
];

/// Write the full analysed batch as comma-separated UTF-8 text.
///
/// Numbers are written at full precision so that re-loading the file and
/// re-analysing it reproduces every recommendation.
pub fn write_report<W: Write>(report: &AnalysisReport, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(EXPORT_COLUMNS)?;

    for analyzed in &report.records {
        let r = &analyzed.record;
        let d = &analyzed.derived;
        wtr.write_record([
            r.ticker().to_string(),
            r.expiry().format("%Y-%m-%d").to_string(),
            r.option_type().to_string(),
            r.premium().to_string(),
            r.strike().to_string(),
            r.iv().to_string(),
            r.hv().to_string(),
            d.grade.to_string(),
            d.mean_iv.to_string(),
            d.break_even.to_string(),
            d.label.clone(),
            d.emphasis.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!(records = report.len(), "exported analysis report");
    Ok(())
}

/// Export into an in-memory UTF-8 string.
pub fn report_to_csv_string(report: &AnalysisReport) -> Result<String> {
    let mut buf = Vec::new();
    write_report(report, &mut buf)?;
    // csv only ever writes the UTF-8 it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
