use tracing::debug;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::types::{AnalysisReport, AnalyzedRecord, DerivedFields, OptionRecord};
use crate::models::grader::{classify, grade, Signals};
use crate::models::payoff::break_even;
use crate::models::utils::mean;

/// Arithmetic mean of IV across a batch; `None` when the batch is empty.
pub fn batch_mean_iv(records: &[OptionRecord]) -> Option<f64> {
    mean(records.iter().map(|r| r.iv()))
}

/// Derive all per-record fields given the batch aggregate.
pub fn derive_fields(
    record: &OptionRecord,
    mean_iv: f64,
    config: &AnalysisConfig,
) -> DerivedFields {
    let grade = grade(record.premium(), record.strike());
    let recommendation = classify(
        &Signals {
            grade,
            iv: record.iv(),
            hv: record.hv(),
            mean_iv,
        },
        config.grade_threshold,
    );

    DerivedFields {
        grade,
        mean_iv,
        break_even: break_even(record.option_type(), record.strike(), record.premium()),
        recommendation,
        label: recommendation.label(record.option_type(), config.grade_threshold),
        emphasis: recommendation.emphasis(),
    }
}

/// One analysis pass over a batch of validated records.
///
/// The pass owns its records and shares nothing with other passes, so the
/// batch mean IV is always the mean of exactly these records.
pub struct AnalysisPass {
    config: AnalysisConfig,
    records: Vec<OptionRecord>,
}

impl AnalysisPass {
    pub fn new(config: AnalysisConfig, records: Vec<OptionRecord>) -> Self {
        Self { config, records }
    }

    /// Compute MeanIV once, then derive every record against it.
    pub fn run(&self) -> AnalysisReport {
        let mean_iv = batch_mean_iv(&self.records);
        debug!(
            records = self.records.len(),
            mean_iv = ?mean_iv,
            "running analysis pass"
        );

        let records = match mean_iv {
            Some(m) => self
                .records
                .iter()
                .map(|record| AnalyzedRecord {
                    record: record.clone(),
                    derived: derive_fields(record, m, &self.config),
                })
                .collect(),
            None => Vec::new(),
        };

        AnalysisReport {
            records,
            mean_iv,
            grade_threshold: self.config.grade_threshold,
        }
    }
}
