pub mod alignment;
pub mod classification;
pub mod fasta;
pub mod sequence;

pub use classification::{Candidate, ScopClass};
pub use sequence::Sequence;
