//! Playing a live game against the solver.
//!
//! A [`Session`] tracks the words still possible and the guesses still
//! allowed as feedback comes in, and asks the search for the next guess.

use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::solver::{Outcome, Solver, INFEASIBLE};
use crate::table::FeedbackTable;
use crate::WordId;

#[derive(Debug, Clone)]
pub struct Session<'t> {
    solver: Solver<'t>,
    candidates: Vec<WordId>,
    guesses: Vec<WordId>,
    history: Vec<(WordId, FeedbackPattern)>,
}

impl<'t> Session<'t> {
    /// A fresh game: every solution possible, every word available as a guess.
    pub fn new(solver: Solver<'t>) -> Self {
        let table = solver.table();
        Self {
            solver,
            candidates: table.solutions(),
            guesses: table.guess_order().to_vec(),
            history: Vec::new(),
        }
    }

    fn table(&self) -> &'t FeedbackTable {
        self.solver.table()
    }

    /// Record that `guess` drew `code`.
    pub fn record(&mut self, guess: WordId, code: FeedbackPattern) {
        let table = self.table();
        self.candidates.retain(|&secret| table.code(guess, secret) == code);
        self.guesses = self.solver.narrow(guess, code, &self.guesses).into_owned();
        self.history.push((guess, code));
    }

    /// Record a guess and its feedback as typed, e.g. `("cater", "bgggg")`.
    pub fn play(&mut self, word: &str, feedback: &str) -> Result<FeedbackPattern> {
        let guess = self.table().lookup(word)?;
        let code = FeedbackPattern::parse(feedback).ok_or_else(|| Error::InvalidFeedback(feedback.to_string()))?;
        self.record(guess, code);
        Ok(code)
    }

    /// The cheapest next guess and the guesses it still costs over every
    /// remaining candidate. No guess when nothing is left to find, or when
    /// the remaining turns cannot separate the candidates.
    pub fn suggest(&self) -> Outcome {
        self.solver
            .solve_cost(&self.candidates, &self.guesses, INFEASIBLE, self.turn())
    }

    pub fn candidates(&self) -> &[WordId] {
        &self.candidates
    }

    pub fn guesses(&self) -> &[WordId] {
        &self.guesses
    }

    pub fn history(&self) -> &[(WordId, FeedbackPattern)] {
        &self.history
    }

    /// Guesses made so far.
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|(_, code)| code.is_win())
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.solver);
    }
}
