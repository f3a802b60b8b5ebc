pub mod config;
pub mod diversity_selector;
pub mod selection;

pub use diversity_selector::{DiversitySelector, SelectedEntry, SelectionOutcome, SelectionStrategy};
