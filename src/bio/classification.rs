/// SCOP class codes and candidate filtering
///
/// ASTRAL headers carry the sccs string right after the domain id,
/// e.g. `>d1dlwa_ a.1.1.1 (A:) Protozoan/bacterial hemoglobin`. The class
/// is the part of that string before the first dot.
use crate::bio::sequence::Sequence;
use crate::DiverseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// User facing class labels accepted on the command line.
pub const CLASS_LABELS: [&str; 4] = ["A", "B", "A/B", "A+B"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScopClass {
    /// `a`: all alpha proteins
    AllAlpha,
    /// `b`: all beta proteins
    AllBeta,
    /// `c`: alpha and beta proteins (a/b)
    AlphaSlashBeta,
    /// `d`: alpha and beta proteins (a+b)
    AlphaPlusBeta,
    Other(String),
}

impl ScopClass {
    pub fn from_code(code: &str) -> Self {
        match code {
            "a" => ScopClass::AllAlpha,
            "b" => ScopClass::AllBeta,
            "c" => ScopClass::AlphaSlashBeta,
            "d" => ScopClass::AlphaPlusBeta,
            other => ScopClass::Other(other.to_string()),
        }
    }

    /// Map a command-line label (`A`, `B`, `A/B`, `A+B`) to its class.
    pub fn from_label(label: &str) -> Result<Self, DiverseError> {
        match label {
            "A" => Ok(ScopClass::AllAlpha),
            "B" => Ok(ScopClass::AllBeta),
            "A/B" => Ok(ScopClass::AlphaSlashBeta),
            "A+B" => Ok(ScopClass::AlphaPlusBeta),
            _ => Err(DiverseError::Classification(format!(
                "Unknown SCOP class '{}'. Options: {}",
                label,
                CLASS_LABELS.join(", ")
            ))),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ScopClass::AllAlpha => "a",
            ScopClass::AllBeta => "b",
            ScopClass::AlphaSlashBeta => "c",
            ScopClass::AlphaPlusBeta => "d",
            ScopClass::Other(code) => code,
        }
    }

    pub fn all_labelled() -> Vec<Self> {
        vec![
            ScopClass::AllAlpha,
            ScopClass::AllBeta,
            ScopClass::AlphaSlashBeta,
            ScopClass::AlphaPlusBeta,
        ]
    }
}

impl std::fmt::Display for ScopClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Extract the class from a header description (text after the id).
///
/// Returns `None` when the first token is not a dotted sccs string.
pub fn extract_class(description: &str) -> Option<ScopClass> {
    let sccs = description.split_whitespace().next()?;
    if !sccs.contains('.') {
        return None;
    }
    sccs.split('.').next().map(ScopClass::from_code)
}

pub fn classify(sequence: &Sequence) -> Option<ScopClass> {
    sequence.description.as_deref().and_then(extract_class)
}

/// A sequence that passed filtering, with its class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub sequence: Sequence,
    pub class: ScopClass,
}

#[derive(Debug, Clone, Default)]
pub struct FilterSummary {
    pub candidates: Vec<Candidate>,
    pub total_sequences: usize,
    pub unclassified: usize,
}

impl FilterSummary {
    pub fn class_distribution(&self) -> BTreeMap<ScopClass, usize> {
        class_distribution(&self.candidates)
    }
}

/// Keep sequences whose class is in `classes` and whose length is strictly
/// below `max_length`. Input order is preserved.
pub fn filter_candidates(
    sequences: Vec<Sequence>,
    classes: &[ScopClass],
    max_length: usize,
) -> FilterSummary {
    let total_sequences = sequences.len();
    let mut unclassified = 0;
    let mut candidates = Vec::new();

    for sequence in sequences {
        let Some(class) = classify(&sequence) else {
            unclassified += 1;
            continue;
        };

        if classes.contains(&class) && sequence.len() < max_length {
            candidates.push(Candidate { sequence, class });
        }
    }

    debug!(
        "Filtered {} of {} sequences ({} unclassified)",
        candidates.len(),
        total_sequences,
        unclassified
    );

    FilterSummary {
        candidates,
        total_sequences,
        unclassified,
    }
}

pub fn class_distribution(candidates: &[Candidate]) -> BTreeMap<ScopClass, usize> {
    let mut counts = BTreeMap::new();
    for candidate in candidates {
        *counts.entry(candidate.class.clone()).or_insert(0) += 1;
    }
    counts
}
