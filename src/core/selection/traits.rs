/// Trait definitions used by the diversity selector
///
/// `Selectable` lets the selector borrow whatever record type the caller
/// holds, and `SelectionObserver` receives one event per pick.
use crate::bio::classification::Candidate;
use crate::bio::sequence::Sequence;
use crate::core::diversity_selector::SelectionOutcome;
use serde::Serialize;

/// Anything with an identifier and a residue string.
pub trait Selectable {
    fn id(&self) -> &str;
    fn residues(&self) -> &[u8];
}

impl Selectable for Sequence {
    fn id(&self) -> &str {
        &self.id
    }

    fn residues(&self) -> &[u8] {
        &self.sequence
    }
}

impl Selectable for Candidate {
    fn id(&self) -> &str {
        &self.sequence.id
    }

    fn residues(&self) -> &[u8] {
        &self.sequence.sequence
    }
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn residues(&self) -> &[u8] {
        (**self).residues()
    }
}

/// One pick made by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionStep<'a> {
    /// 1-based; the seed is step 1
    pub step: usize,
    pub index: usize,
    pub id: &'a str,
    /// Max identity to the set at the time of the pick (0.0 for the seed)
    pub max_identity: f64,
}

/// Receives progress events from a selection run.
///
/// Observers never influence the outcome.
pub trait SelectionObserver {
    fn on_start(&mut self, _total: usize, _target: usize) {}

    fn on_step(&mut self, step: &SelectionStep<'_>);

    fn on_finish(&mut self, _outcome: &SelectionOutcome) {}
}

impl<F> SelectionObserver for F
where
    F: FnMut(&SelectionStep<'_>),
{
    fn on_step(&mut self, step: &SelectionStep<'_>) {
        self(step)
    }
}
