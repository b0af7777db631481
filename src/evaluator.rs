//! Scoring whole strategies by their opening guess.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::solver::{partition, Cost, Outcome, Solver};
use crate::table::FeedbackTable;
use crate::WordId;

/// Best opening guess found by [`Evaluator::sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// The cheapest opener and its total cost, if any opener came in under the
    /// starting bound.
    pub best: Option<(WordId, Cost)>,
    pub evaluated: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'t> {
    solver: Solver<'t>,
}

impl<'t> Evaluator<'t> {
    pub fn new(solver: Solver<'t>) -> Self {
        Self { solver }
    }

    fn table(&self) -> &'t FeedbackTable {
        self.solver.table()
    }

    /// Six guesses for every solution. No strategy that stays within the turn
    /// limit can cost this much.
    pub fn default_bound(&self) -> Cost {
        6 * self.table().solution_count() as Cost
    }

    /// Total cost of the best strategy opening with `first_guess`, summed over
    /// every solution.
    ///
    /// A cost at or above `bound` only says the opener cannot beat it.
    pub fn solve(&self, first_guess: WordId, bound: Cost) -> Outcome {
        let table = self.table();
        let candidates = table.solutions();
        let guesses = table.guess_order();
        let groups = partition(table, first_guess, &candidates);
        let total_groups = groups.len();

        let mut cost = candidates.len() as Cost;
        for (i, group) in groups.iter().enumerate() {
            if cost >= bound {
                break;
            }
            if group.code.is_win() {
                continue;
            }
            let pool = self.solver.narrow(first_guess, group.code, guesses);
            let sub = self.solver.solve_cost(&group.words, &pool, bound - cost, 1);
            cost = cost.saturating_add(sub.cost);
            debug!(
                "{} {}: {}/{} ({} words) cost {} (running {cost})",
                table.word(first_guess),
                group.code,
                i + 1,
                total_groups,
                group.words.len(),
                sub.cost,
            );
        }

        Outcome {
            guess: Some(first_guess),
            cost,
        }
    }

    /// Average guesses per solution for the best strategy opening with `word`.
    pub fn eval(&self, word: &str) -> Result<f64> {
        let first_guess = self.table().lookup(word)?;
        let bound = self.default_bound();
        let outcome = self.solve(first_guess, bound);
        if outcome.cost >= bound {
            return Err(Error::Unresolvable);
        }
        Ok(outcome.cost as f64 / self.table().solution_count() as f64)
    }

    /// Evaluate `openers` in order, tightening the bound to the best total
    /// found so far. An opener must be strictly cheaper to replace the
    /// incumbent, so the earliest of equally good openers wins.
    pub fn sweep(&self, openers: &[WordId]) -> Sweep {
        let mut bound = self.default_bound();
        let mut best = None;

        for &opener in openers {
            let outcome = self.solve(opener, bound);
            if outcome.cost < bound {
                bound = outcome.cost;
                best = Some((opener, outcome.cost));
                info!(
                    "new best opener {} with {} guesses ({:.4} average)",
                    self.table().word(opener),
                    outcome.cost,
                    outcome.cost as f64 / self.table().solution_count() as f64
                );
            }
        }

        Sweep {
            best,
            evaluated: openers.len(),
        }
    }
}
