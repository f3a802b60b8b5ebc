use crate::bio::classification::CLASS_LABELS;
use crate::bio::fasta::DEFAULT_LINE_WIDTH;
use crate::core::diversity_selector::SelectionStrategy;
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selection: SelectionConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of sequences to select
    pub target_count: usize,
    pub strategy: SelectionStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// SCOP class labels to keep (A, B, A/B, A+B)
    pub classes: Vec<String>,
    /// Sequences must be strictly shorter than this
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub fasta: String,
    pub info: String,
    pub report_format: ReportFormat,
    pub line_width: usize,
    pub show_progress: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_count: 30,
            strategy: SelectionStrategy::Incremental,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            classes: CLASS_LABELS.iter().map(|s| s.to_string()).collect(),
            max_length: 70,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fasta: "selected_domains.fa".to_string(),
            info: "selection_info.tsv".to_string(),
            report_format: ReportFormat::Tsv,
            line_width: DEFAULT_LINE_WIDTH,
            show_progress: true,
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::DiverseError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::DiverseError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::DiverseError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::DiverseError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::DiverseError> {
        if self.filter.classes.is_empty() {
            return Err(crate::DiverseError::Config(
                "filter.classes must name at least one class".to_string(),
            ));
        }
        if let Some(bad) = self
            .filter
            .classes
            .iter()
            .find(|c| !CLASS_LABELS.contains(&c.as_str()))
        {
            return Err(crate::DiverseError::Config(format!(
                "Unknown class '{}' in filter.classes. Options: {}",
                bad,
                CLASS_LABELS.join(", ")
            )));
        }
        if self.output.line_width == 0 {
            return Err(crate::DiverseError::Config(
                "output.line_width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
