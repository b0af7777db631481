//! Word lists: the possible solutions plus the extra words accepted as guesses.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::word::Word;

/// The word universe in table order: every solution, then every allowed guess
/// that is not also a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
    solution_count: usize,
}

impl Vocabulary {
    /// Combine the two lists. Duplicates are dropped, keeping the first
    /// occurrence, and an allowed guess that is also a solution stays a
    /// solution.
    pub fn new(solutions: Vec<Word>, allowed: Vec<Word>) -> Self {
        let mut seen = HashSet::new();
        let mut words: Vec<Word> = solutions.into_iter().filter(|w| seen.insert(*w)).collect();
        let solution_count = words.len();
        words.extend(allowed.into_iter().filter(|w| seen.insert(*w)));
        Self { words, solution_count }
    }

    /// Read a solution dictionary and an allowed-guess list, one word per line.
    pub fn load(solutions: &Path, allowed: &Path) -> Result<Self> {
        let solutions = parse_list(&fs::read_to_string(solutions)?)?;
        let allowed = parse_list(&fs::read_to_string(allowed)?)?;
        Ok(Self::new(solutions, allowed))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn solution_count(&self) -> usize {
        self.solution_count
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parse newline-delimited words, skipping blank lines.
pub fn parse_list(contents: &str) -> Result<Vec<Word>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Word::new(line).ok_or_else(|| Error::InvalidWord(line.to_string())))
        .collect()
}
