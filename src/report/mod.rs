use crate::bio::classification::Candidate;
use crate::core::diversity_selector::SelectionOutcome;
use crate::DiverseError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub mod json;
pub mod tsv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Tsv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// One selected domain, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub order: usize,
    pub domain_id: String,
    pub class: String,
    pub length: usize,
    pub max_identity_to_set: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub candidates: usize,
    pub requested: usize,
    pub rows: Vec<ReportRow>,
}

impl SelectionReport {
    /// Rows cover scored picks only, so a trivial run reports none.
    pub fn new(outcome: &SelectionOutcome, candidates: &[Candidate], requested: usize) -> Self {
        let rows = outcome
            .entries()
            .filter_map(|entry| {
                let max_identity = entry.max_identity?;
                let candidate = &candidates[entry.index];
                Some(ReportRow {
                    order: entry.rank,
                    domain_id: candidate.sequence.id.clone(),
                    class: candidate.class.code().to_string(),
                    length: candidate.sequence.len(),
                    max_identity_to_set: max_identity,
                })
            })
            .collect();

        Self {
            candidates: candidates.len(),
            requested,
            rows,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, DiverseError> {
        match format {
            ReportFormat::Tsv => Ok(tsv::generate_tsv_report(self)),
            ReportFormat::Json => json::generate_json_report(self),
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<(), DiverseError> {
        std::fs::write(path, self.render(format)?)?;
        Ok(())
    }

    /// Mean of the recorded max identities, seed excluded.
    pub fn mean_max_identity(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .rows
            .iter()
            .skip(1)
            .map(|r| r.max_identity_to_set)
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }
}
