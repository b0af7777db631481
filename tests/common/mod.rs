#![allow(dead_code)]

use wordle_optimal::{FeedbackTable, Rules, Vocabulary, Word};

/// A family of -er words with lots of shared letters, hard to separate under
/// hard-mode play.
pub const SOLUTIONS: &[&str] = &[
    "baker", "boxer", "cater", "cower", "eater", "hater", "later", "mower", "paper", "racer", "saner", "taker",
    "water", "wager", "maker", "lower", "power", "tower", "rower", "sower", "joker", "poker", "caper", "taper",
    "gazer",
];

pub const EXTRA: &[&str] = &["crane", "slate", "mopey", "twerp", "chomp"];

pub const FIVE: &[&str] = &["about", "above", "abuse", "actor", "acute"];

pub fn w(text: &str) -> Word {
    text.parse().unwrap()
}

pub fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|text| w(text)).collect()
}

pub fn table_with(solutions: &[&str], extra: &[&str], rules: Rules) -> FeedbackTable {
    FeedbackTable::build(&Vocabulary::new(words(solutions), words(extra)), rules).unwrap()
}

pub fn er_table() -> FeedbackTable {
    table_with(SOLUTIONS, EXTRA, Rules::Standard)
}
