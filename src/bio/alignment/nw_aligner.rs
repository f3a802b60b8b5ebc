/// Needleman-Wunsch global alignment algorithm
use crate::bio::alignment::scoring::{IdentityScoring, ScoringMatrix};

const GAP: u8 = b'-';

#[derive(Debug, Clone)]
pub struct DetailedAlignment {
    pub score: i32,
    pub a_aligned: Vec<u8>,
    pub b_aligned: Vec<u8>,
    pub alignment_string: Vec<u8>, // '|' for match, 'X' for mismatch, ' ' for gap
    pub matches: usize,
    pub aligned_length: usize,
    pub identity: f64, // matches / aligned_length (0.0 to 1.0)
}

pub struct NeedlemanWunsch<S: ScoringMatrix> {
    scoring: S,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Traceback {
    Diagonal,
    Up,
    Left,
    None,
}

/// Fraction of identical columns in one optimal match-only global alignment.
///
/// Returns 0.0 when either sequence is empty. Ties between equally optimal
/// alignments are broken diagonal first, then a gap in `b`, then a gap in `a`,
/// which keeps the alignment as compact as possible.
pub fn identity(a: &[u8], b: &[u8]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    NeedlemanWunsch::new(IdentityScoring::new())
        .align(a, b)
        .identity
}

impl<S: ScoringMatrix> NeedlemanWunsch<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }

    pub fn align(&self, a: &[u8], b: &[u8]) -> DetailedAlignment {
        let a_len = a.len();
        let b_len = b.len();

        let mut score_matrix = vec![vec![0i32; b_len + 1]; a_len + 1];
        let mut traceback_matrix = vec![vec![Traceback::None; b_len + 1]; a_len + 1];

        self.initialize_matrices(&mut score_matrix, &mut traceback_matrix, a_len, b_len);
        self.fill_matrices(&mut score_matrix, &mut traceback_matrix, a, b);

        let (a_aligned, b_aligned) = self.traceback(&traceback_matrix, a, b);
        let alignment_string = calculate_alignment_string(&a_aligned, &b_aligned);

        let matches = alignment_string.iter().filter(|&&c| c == b'|').count();
        let aligned_length = a_aligned
            .iter()
            .zip(b_aligned.iter())
            .filter(|(&x, &y)| x != GAP || y != GAP)
            .count();
        let identity = if aligned_length > 0 {
            matches as f64 / aligned_length as f64
        } else {
            0.0
        };

        DetailedAlignment {
            score: score_matrix[a_len][b_len],
            a_aligned,
            b_aligned,
            alignment_string,
            matches,
            aligned_length,
            identity,
        }
    }

    fn initialize_matrices(
        &self,
        score_matrix: &mut [Vec<i32>],
        traceback_matrix: &mut [Vec<Traceback>],
        a_len: usize,
        b_len: usize,
    ) {
        let gap = self.scoring.gap_penalty();

        for j in 1..=b_len {
            score_matrix[0][j] = -(gap * j as i32);
            traceback_matrix[0][j] = Traceback::Left;
        }

        for i in 1..=a_len {
            score_matrix[i][0] = -(gap * i as i32);
            traceback_matrix[i][0] = Traceback::Up;
        }
    }

    fn fill_matrices(
        &self,
        score_matrix: &mut [Vec<i32>],
        traceback_matrix: &mut [Vec<Traceback>],
        a: &[u8],
        b: &[u8],
    ) {
        let gap = self.scoring.gap_penalty();

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let diagonal_score = score_matrix[i - 1][j - 1] + self.scoring.score(a[i - 1], b[j - 1]);
                let up_score = score_matrix[i - 1][j] - gap;
                let left_score = score_matrix[i][j - 1] - gap;

                // Ties resolve Diagonal > Up > Left
                let (best_score, direction) =
                    if diagonal_score >= up_score && diagonal_score >= left_score {
                        (diagonal_score, Traceback::Diagonal)
                    } else if up_score >= left_score {
                        (up_score, Traceback::Up)
                    } else {
                        (left_score, Traceback::Left)
                    };

                score_matrix[i][j] = best_score;
                traceback_matrix[i][j] = direction;
            }
        }
    }

    fn traceback(
        &self,
        traceback_matrix: &[Vec<Traceback>],
        a: &[u8],
        b: &[u8],
    ) -> (Vec<u8>, Vec<u8>) {
        let mut a_aligned = Vec::with_capacity(a.len() + b.len());
        let mut b_aligned = Vec::with_capacity(a.len() + b.len());

        let mut i = a.len();
        let mut j = b.len();

        while i > 0 || j > 0 {
            match traceback_matrix[i][j] {
                Traceback::Diagonal => {
                    a_aligned.push(a[i - 1]);
                    b_aligned.push(b[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                Traceback::Up => {
                    a_aligned.push(a[i - 1]);
                    b_aligned.push(GAP);
                    i -= 1;
                }
                Traceback::Left => {
                    a_aligned.push(GAP);
                    b_aligned.push(b[j - 1]);
                    j -= 1;
                }
                Traceback::None => break,
            }
        }

        a_aligned.reverse();
        b_aligned.reverse();

        (a_aligned, b_aligned)
    }
}

fn calculate_alignment_string(a_aligned: &[u8], b_aligned: &[u8]) -> Vec<u8> {
    a_aligned
        .iter()
        .zip(b_aligned.iter())
        .map(|(&x, &y)| {
            if x == GAP || y == GAP {
                b' '
            } else if x == y {
                b'|'
            } else {
                b'X'
            }
        })
        .collect()
}
