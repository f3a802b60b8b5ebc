pub mod nw_aligner;
pub mod scoring;

pub use nw_aligner::{identity, DetailedAlignment, NeedlemanWunsch};
pub use scoring::{IdentityScoring, ScoringMatrix};
