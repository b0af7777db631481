//! Exact branch-and-bound search for the cheapest Wordle strategy.
//!
//! The cost of a strategy over a candidate set is the total number of guesses
//! it needs, summed over every candidate as the secret. A set of `n`
//! candidates can never cost less than `2n - 1`: one guess for the word that
//! is guessed outright, two for every other.
//!
//! Guesses are tried in entropy order (see [`crate::entropy`]). Each search
//! call carries a bound, the cost above which its answer is useless to the
//! caller, and abandons any guess whose lower bound or running total reaches
//! it.

use std::borrow::Cow;

use crate::entropy::{self, histogram};
use crate::feedback::FeedbackPattern;
use crate::table::FeedbackTable;
use crate::{WordId, MAX_GUESSES};

pub type Cost = u32;

/// Cost reported for a candidate set the remaining turns cannot resolve. It
/// dwarfs every real cost, and sums involving it saturate.
pub const INFEASIBLE: Cost = 1_000_000;

/// Depth of the last guess the game allows; the opening guess is depth 0.
const LAST_TURN: usize = MAX_GUESSES - 1;

/// Which guesses stay available after a feedback pattern is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuessPolicy {
    /// Only guesses that would have produced the same pattern, i.e. words
    /// consistent with everything seen so far (hard mode).
    #[default]
    Consistent,
    /// The parent's whole guess pool.
    Unrestricted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    pub policy: GuessPolicy,
}

/// The result of a search: the best guess found and its total cost.
///
/// `guess` is `None` when nothing beat the bound the search was given (the
/// cost is then the bound itself) or when the candidates cannot be resolved
/// in time (the cost is [`INFEASIBLE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub guess: Option<WordId>,
    pub cost: Cost,
}

impl Outcome {
    pub fn infeasible() -> Self {
        Self {
            guess: None,
            cost: INFEASIBLE,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.cost < INFEASIBLE
    }
}

/// The candidates that share one feedback pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub code: FeedbackPattern,
    pub words: Vec<WordId>,
}

/// Split `candidates` by the feedback `guess` gets against each of them.
/// Smallest groups come first, ties in pattern order.
pub fn partition(table: &FeedbackTable, guess: WordId, candidates: &[WordId]) -> Vec<Group> {
    let counts = histogram(table, guess, candidates);
    let mut slots = [usize::MAX; FeedbackPattern::NUM_PATTERNS];
    let mut groups = Vec::new();
    for (code, &count) in counts.iter().enumerate() {
        if count > 0 {
            slots[code] = groups.len();
            groups.push(Group {
                code: FeedbackPattern(code as u8),
                words: Vec::with_capacity(count as usize),
            });
        }
    }
    for &secret in candidates {
        groups[slots[table.code(guess, secret).0 as usize]].words.push(secret);
    }
    groups.sort_by_key(|group| group.words.len());
    groups
}

#[derive(Debug, Clone, Copy)]
pub struct Solver<'t> {
    table: &'t FeedbackTable,
    options: SolverOptions,
}

impl<'t> Solver<'t> {
    pub fn new(table: &'t FeedbackTable) -> Self {
        Self::with_options(table, SolverOptions::default())
    }

    pub fn with_options(table: &'t FeedbackTable, options: SolverOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &'t FeedbackTable {
        self.table
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// The guess pool left after `guess` drew `code`.
    pub fn narrow<'a>(&self, guess: WordId, code: FeedbackPattern, guesses: &'a [WordId]) -> Cow<'a, [WordId]> {
        match self.options.policy {
            GuessPolicy::Consistent => guesses
                .iter()
                .copied()
                .filter(|&other| self.table.code(guess, other) == code)
                .collect(),
            GuessPolicy::Unrestricted => Cow::Borrowed(guesses),
        }
    }

    /// Find the guess from `guesses` that identifies every word in
    /// `candidates` with the fewest total guesses, `depth` guesses into the
    /// game.
    ///
    /// Anything costing `bound` or more is not worth finding: if no guess
    /// comes in under it the outcome carries no guess and the bound as cost.
    pub fn solve_cost(&self, candidates: &[WordId], guesses: &[WordId], bound: Cost, depth: usize) -> Outcome {
        let n = candidates.len() as Cost;

        if depth > LAST_TURN || (depth == LAST_TURN && n > 1) {
            return Outcome::infeasible();
        }
        match candidates {
            [] => return Outcome { guess: None, cost: 0 },
            [first] | [first, _] => {
                return Outcome {
                    guess: Some(*first),
                    cost: 2 * n - 1,
                }
            }
            _ => {}
        }

        let floor = 2 * n - 1;
        let mut best = Outcome { guess: None, cost: bound };

        for ranked in entropy::rank(self.table, candidates, guesses) {
            let guess = ranked.guess;
            let groups = partition(self.table, guess, candidates);
            let k = groups.len() as Cost;

            // One guess for everyone, and at least 2m - 1 more for each group
            // of m, except the one holding the guess itself.
            let min_possible = 3 * n - k - Cost::from(ranked.can_solve);
            if min_possible >= best.cost {
                continue;
            }

            if !ranked.can_solve {
                // Solving guesses were all ranked first, and nothing else can
                // get below 2n.
                if best.cost == 2 * n {
                    break;
                }
                if k == 1 {
                    continue;
                }
            }

            let mut cost = n;
            for group in &groups {
                if cost >= best.cost {
                    break;
                }
                if group.code.is_win() {
                    continue;
                }
                let pool = self.narrow(guess, group.code, guesses);
                let sub = self.solve_cost(&group.words, &pool, best.cost - cost, depth + 1);
                cost = cost.saturating_add(sub.cost);
            }

            if cost < best.cost {
                best = Outcome {
                    guess: Some(guess),
                    cost,
                };
                if cost == floor {
                    return best;
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Rules;
    use crate::vocabulary::Vocabulary;

    fn table(words: &[&str]) -> FeedbackTable {
        let words = words.iter().map(|w| w.parse().unwrap()).collect();
        FeedbackTable::build(&Vocabulary::new(words, Vec::new()), Rules::Standard).unwrap()
    }

    #[test]
    fn partition_orders_groups_by_size() {
        // against "cater": hater, later and water all score ⬛🟩🟩🟩🟩
        let table = table(&["cater", "baker", "hater", "later", "water", "mower"]);
        let candidates = table.solutions();
        let groups = partition(&table, 0, &candidates);

        let sizes: Vec<usize> = groups.iter().map(|g| g.words.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1, 3]);
        assert_eq!(groups[3].words, vec![2, 3, 4]);
        assert_eq!(groups[3].code, FeedbackPattern::parse("bgggg").unwrap());
        assert!(groups.iter().any(|g| g.code.is_win() && g.words == vec![0]));
    }

    #[test]
    fn consistent_policy_keeps_matching_guesses() {
        let table = table(&["cater", "baker", "hater", "later", "water", "mower"]);
        let solver = Solver::new(&table);
        let pool: Vec<WordId> = (0..6).collect();
        let code = table.code(0, 2);

        let narrowed = solver.narrow(0, code, &pool);
        assert_eq!(narrowed.as_ref(), &[2, 3, 4]);

        let free = Solver::with_options(
            &table,
            SolverOptions {
                policy: GuessPolicy::Unrestricted,
            },
        );
        assert_eq!(free.narrow(0, code, &pool).as_ref(), pool.as_slice());
    }

    #[test]
    fn depth_limit_is_infeasible() {
        let table = table(&["cater", "baker", "hater"]);
        let solver = Solver::new(&table);
        let all = table.solutions();

        assert_eq!(solver.solve_cost(&all[..2], &all, 100, LAST_TURN), Outcome::infeasible());
        assert_eq!(solver.solve_cost(&all[..1], &all, 100, LAST_TURN + 1), Outcome::infeasible());
        assert_eq!(
            solver.solve_cost(&all[..1], &all, 100, LAST_TURN),
            Outcome { guess: Some(0), cost: 1 }
        );
    }
}
