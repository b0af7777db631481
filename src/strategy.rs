//! Complete decision trees.
//!
//! [`Evaluator::solve`](crate::Evaluator::solve) only prices an opening guess.
//! A [`StrategyTree`] spells the strategy out: the guess to play after every
//! feedback sequence, down to the point where each solution is named.

use std::fmt;

use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::solver::{partition, Cost, Solver, INFEASIBLE};
use crate::table::FeedbackTable;
use crate::{WordId, MAX_GUESSES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub guess: WordId,
    /// Follow-ups keyed by the feedback `guess` received, sorted by pattern.
    /// The winning pattern has no entry.
    pub branches: Vec<(FeedbackPattern, Node)>,
}

impl Node {
    fn next(&self, code: FeedbackPattern) -> Option<&Node> {
        self.branches
            .binary_search_by_key(&code, |(branch, _)| *branch)
            .ok()
            .map(|i| &self.branches[i].1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTree {
    root: Node,
}

impl StrategyTree {
    /// Expand the cheapest strategy that opens with `opener`.
    pub fn build(solver: &Solver<'_>, opener: WordId) -> Result<Self> {
        let table = solver.table();
        let root = expand(solver, opener, &table.solutions(), table.guess_order(), 0)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of guesses the strategy takes when `secret` is the answer, or
    /// `None` if the tree has no path for it.
    pub fn guesses_for(&self, table: &FeedbackTable, secret: WordId) -> Option<usize> {
        let mut node = &self.root;
        for turn in 1..=MAX_GUESSES {
            let code = table.code(node.guess, secret);
            if code.is_win() {
                return Some(turn);
            }
            node = node.next(code)?;
        }
        None
    }

    /// Guesses summed over every solution.
    pub fn total_cost(&self, table: &FeedbackTable) -> Option<Cost> {
        table
            .solutions()
            .into_iter()
            .map(|secret| self.guesses_for(table, secret).map(|n| n as Cost))
            .sum()
    }

    /// `(guesses, solutions)` pairs for every guess count that occurs.
    pub fn distribution(&self, table: &FeedbackTable) -> Vec<(usize, usize)> {
        let mut distribution = vec![0usize; MAX_GUESSES + 1];
        for secret in table.solutions() {
            if let Some(count) = self.guesses_for(table, secret) {
                distribution[count] += 1;
            }
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// One line per node, indented by depth: the feedback that led there and
    /// the guess to play.
    pub fn render(&self, table: &FeedbackTable) -> String {
        Rendered { tree: self, table }.to_string()
    }
}

struct Rendered<'a> {
    tree: &'a StrategyTree,
    table: &'a FeedbackTable,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.table.word(self.tree.root.guess))?;
        self.branches(f, &self.tree.root, 1)
    }
}

impl Rendered<'_> {
    fn branches(&self, f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
        for (code, child) in &node.branches {
            writeln!(f, "{}{} {}", "  ".repeat(depth), code, self.table.word(child.guess))?;
            self.branches(f, child, depth + 1)?;
        }
        Ok(())
    }
}

fn expand(solver: &Solver<'_>, guess: WordId, candidates: &[WordId], guesses: &[WordId], depth: usize) -> Result<Node> {
    let mut branches = Vec::new();
    for group in partition(solver.table(), guess, candidates) {
        if group.code.is_win() {
            continue;
        }
        let pool = solver.narrow(guess, group.code, guesses);
        let next = solver
            .solve_cost(&group.words, &pool, INFEASIBLE, depth + 1)
            .guess
            .ok_or(Error::Unresolvable)?;
        branches.push((group.code, expand(solver, next, &group.words, &pool, depth + 1)?));
    }
    branches.sort_by_key(|(code, _)| *code);
    Ok(Node { guess, branches })
}
