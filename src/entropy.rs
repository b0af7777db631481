//! Entropy-based move ordering.
//!
//! A guess splits the candidate set into groups by feedback pattern. The more
//! evenly it splits, the more it reveals, so guesses are searched from the most
//! informative to the least.

use rayon::prelude::*;

use crate::feedback::FeedbackPattern;
use crate::table::FeedbackTable;
use crate::WordId;

/// Below this magnitude a guess produces a single feedback group.
const DEGENERATE: f64 = 1e-12;

/// A guess with its score at one search node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub guess: WordId,
    /// `sum p ln p` over feedback groups: zero for a guess that never splits,
    /// `-ln n` for one that separates all `n` candidates.
    pub entropy: f64,
    /// The guess is itself a candidate, so one of its outcomes is a win.
    pub can_solve: bool,
}

/// Count the candidates landing in each feedback pattern.
pub fn histogram(table: &FeedbackTable, guess: WordId, candidates: &[WordId]) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for &secret in candidates {
        counts[table.code(guess, secret).0 as usize] += 1;
    }
    counts
}

fn entropy_of(counts: &[u32], n: usize) -> f64 {
    let n = n as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            p * p.ln()
        })
        .sum()
}

/// The (negated) Shannon entropy of the feedback distribution `guess`
/// induces over `candidates`.
pub fn entropy(table: &FeedbackTable, guess: WordId, candidates: &[WordId]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    entropy_of(&histogram(table, guess, candidates), candidates.len())
}

/// Order `guesses` for searching `candidates`.
///
/// Guesses that cannot split the candidates are dropped. Guesses that could
/// win outright come first, each half sorted from most to least informative;
/// equal scores keep their input order.
pub fn rank(table: &FeedbackTable, candidates: &[WordId], guesses: &[WordId]) -> Vec<RankedGuess> {
    let win = FeedbackPattern::ALL_CORRECT.0 as usize;
    let (mut solving, mut probing): (Vec<_>, Vec<_>) = guesses
        .iter()
        .map(|&guess| {
            let counts = histogram(table, guess, candidates);
            RankedGuess {
                guess,
                entropy: entropy_of(&counts, candidates.len()),
                can_solve: counts[win] > 0,
            }
        })
        .filter(|ranked| ranked.entropy.abs() >= DEGENERATE)
        .partition(|ranked| ranked.can_solve);

    solving.sort_by(|a, b| a.entropy.total_cmp(&b.entropy));
    probing.sort_by(|a, b| a.entropy.total_cmp(&b.entropy));
    solving.extend(probing);
    solving
}

/// Every word in the table, ranked against the full solution list. Nothing is
/// dropped; words that never split the solutions sort last.
pub fn order_by_information(table: &FeedbackTable) -> Vec<WordId> {
    let solutions = table.solutions();
    let mut scored: Vec<(WordId, f64)> = (0..table.len())
        .into_par_iter()
        .map(|id| {
            let id = id as WordId;
            (id, entropy(table, id, &solutions))
        })
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.into_iter().map(|(id, _)| id).collect()
}
