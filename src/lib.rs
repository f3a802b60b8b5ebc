pub mod bio;
pub mod cli;
pub mod core;
pub mod report;

pub use crate::bio::alignment::identity;
pub use crate::core::diversity_selector::{DiversitySelector, SelectionOutcome};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiverseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("No sequences match the filtering criteria ({total} sequences read)")]
    NoCandidates { total: usize },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DiverseError>;
