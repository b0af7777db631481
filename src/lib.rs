//! # Wordle Optimal
//!
//! Exact minimum-total-guess strategies for Wordle.
//!
//! A [`FeedbackTable`] holds the feedback pattern of every guess against every
//! word. The [`Solver`] runs a branch-and-bound search over that table, ordering
//! moves by entropy and pruning with a provable lower bound, and the
//! [`Evaluator`] scores whole strategies by their opening guess. A [`Session`]
//! follows a live game and suggests each next guess.

pub mod entropy;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod session;
pub mod solver;
pub mod strategy;
pub mod table;
pub mod vocabulary;
pub mod word;

pub use error::{Error, Result};
pub use evaluator::{Evaluator, Sweep};
pub use feedback::{Feedback, FeedbackPattern, Rules};
pub use session::Session;
pub use solver::{Cost, GuessPolicy, Outcome, Solver, SolverOptions, INFEASIBLE};
pub use strategy::StrategyTree;
pub use table::FeedbackTable;
pub use vocabulary::Vocabulary;
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of guesses the game allows
pub const MAX_GUESSES: usize = 6;

/// Index of a word in the table's universe. Solutions come first.
pub type WordId = u16;
