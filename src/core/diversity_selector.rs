/// Greedy farthest-point selection of diverse sequences
///
/// The first sequence seeds the set. Each following step adds the
/// unselected sequence whose highest identity to any selected sequence is
/// the lowest, scanning in input order so the earliest candidate wins ties.
/// The result is locally optimal per step, not globally.
use crate::bio::alignment::identity;
use crate::core::selection::{NoopObserver, Selectable, SelectionObserver, SelectionStep};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// Keep a running max identity per candidate and align each candidate
    /// only against the newest member of the set.
    #[default]
    Incremental,
    /// Realign every candidate against the whole set at every step.
    Recompute,
}

impl SelectionStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionStrategy::Incremental => "incremental",
            SelectionStrategy::Recompute => "recompute",
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incremental" | "cached" => Ok(SelectionStrategy::Incremental),
            "recompute" | "full" => Ok(SelectionStrategy::Recompute),
            _ => Err(format!(
                "Invalid selection strategy: '{}'. Options: incremental, recompute",
                s
            )),
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered picks of a selection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOutcome {
    /// Input indices in selection order
    pub indices: Vec<usize>,
    /// Max identity to the set at the time of each pick; empty when trivial
    pub scores: Vec<f64>,
    /// Every input was kept because there were no more than `n`
    pub trivial: bool,
}

/// One row of a selection, ranked from 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedEntry {
    pub rank: usize,
    pub index: usize,
    pub max_identity: Option<f64>,
}

impl SelectionOutcome {
    fn keep_all(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
            scores: Vec::new(),
            trivial: true,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = SelectedEntry> + '_ {
        self.indices
            .iter()
            .enumerate()
            .map(move |(pos, &index)| SelectedEntry {
                rank: pos + 1,
                index,
                max_identity: self.scores.get(pos).copied(),
            })
    }

    /// Borrow the selected records from the collection that was selected on.
    pub fn selected<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.indices.iter().map(|&i| &items[i]).collect()
    }
}

/// Highest identity between `candidate` and any of the `selected` items.
pub fn max_identity_to_set<T: Selectable>(candidate: &T, items: &[T], selected: &[usize]) -> f64 {
    selected
        .iter()
        .map(|&s| identity(candidate.residues(), items[s].residues()))
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone, Default)]
pub struct DiversitySelector {
    strategy: SelectionStrategy,
}

impl DiversitySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn select<T: Selectable>(&self, items: &[T], n: usize) -> SelectionOutcome {
        self.select_with_observer(items, n, &mut NoopObserver)
    }

    pub fn select_with_observer<T, O>(&self, items: &[T], n: usize, observer: &mut O) -> SelectionOutcome
    where
        T: Selectable,
        O: SelectionObserver + ?Sized,
    {
        observer.on_start(items.len(), n);

        if items.len() <= n {
            let outcome = SelectionOutcome::keep_all(items.len());
            observer.on_finish(&outcome);
            return outcome;
        }

        let mut in_set = vec![false; items.len()];
        let mut indices = Vec::with_capacity(n.max(1));
        let mut scores = Vec::with_capacity(n.max(1));

        in_set[0] = true;
        indices.push(0);
        scores.push(0.0);
        observer.on_step(&SelectionStep {
            step: 1,
            index: 0,
            id: items[0].id(),
            max_identity: 0.0,
        });

        // Running max identity to the set, only maintained for Incremental
        let mut nearest = match self.strategy {
            SelectionStrategy::Incremental => self.nearest_to(items, &in_set, 0),
            SelectionStrategy::Recompute => Vec::new(),
        };

        for step in 1..n {
            let mut best_idx = None;
            let mut min_max_identity = 1.0;

            for (i, item) in items.iter().enumerate() {
                if in_set[i] {
                    continue;
                }

                let max_identity = match self.strategy {
                    SelectionStrategy::Incremental => nearest[i],
                    SelectionStrategy::Recompute => max_identity_to_set(item, items, &indices),
                };
                trace!("step {}: {} max identity {:.4}", step + 1, item.id(), max_identity);

                if max_identity < min_max_identity {
                    min_max_identity = max_identity;
                    best_idx = Some(i);
                }
            }

            let Some(best) = best_idx else {
                debug!(
                    "No candidate below identity 1.0 at step {}, stopping with {} selected",
                    step + 1,
                    indices.len()
                );
                break;
            };

            in_set[best] = true;
            indices.push(best);
            scores.push(min_max_identity);
            observer.on_step(&SelectionStep {
                step: step + 1,
                index: best,
                id: items[best].id(),
                max_identity: min_max_identity,
            });

            if self.strategy == SelectionStrategy::Incremental && step + 1 < n {
                for (i, value) in self.nearest_to(items, &in_set, best).into_iter().enumerate() {
                    if value > nearest[i] {
                        nearest[i] = value;
                    }
                }
            }
        }

        let outcome = SelectionOutcome {
            indices,
            scores,
            trivial: false,
        };
        observer.on_finish(&outcome);
        outcome
    }

    /// Identity of every unselected item to `items[member]`; 0.0 for selected ones.
    fn nearest_to<T: Selectable>(&self, items: &[T], in_set: &[bool], member: usize) -> Vec<f64> {
        let member = items[member].residues();
        items
            .iter()
            .zip(in_set)
            .map(|(item, &selected)| {
                if selected {
                    0.0
                } else {
                    identity(item.residues(), member)
                }
            })
            .collect()
    }
}
