/// Scoring schemes for sequence alignment

pub trait ScoringMatrix {
    fn score(&self, a: u8, b: u8) -> i32;
    /// Penalty charged per gap column (linear model).
    fn gap_penalty(&self) -> i32;
}

/// Match/mismatch scoring with a linear gap penalty.
///
/// The default is the identity scheme used for diversity selection:
/// a match scores 1, mismatches and gaps score 0, so an optimal global
/// alignment maximizes the number of identical aligned residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityScoring {
    match_score: i32,
    mismatch_score: i32,
    gap_penalty: i32,
}

impl IdentityScoring {
    pub fn new() -> Self {
        Self {
            match_score: 1,
            mismatch_score: 0,
            gap_penalty: 0,
        }
    }

    pub fn with_scores(mut self, match_score: i32, mismatch_score: i32) -> Self {
        self.match_score = match_score;
        self.mismatch_score = mismatch_score;
        self
    }

    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }
}

impl Default for IdentityScoring {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringMatrix for IdentityScoring {
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }
}
