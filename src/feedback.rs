//! Scoring a guess against a secret.
//!
//! Every guess/secret pair maps to one of 243 [`FeedbackPattern`]s. The table,
//! the entropy ranking and the search all work on these codes, never on the
//! tiles themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::word::Word;
use crate::WORD_LENGTH;

/// One tile. The discriminant is the tile's base-3 digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Gray: no unmatched copy of the letter is left in the secret.
    Absent = 0,
    /// Yellow: the letter belongs elsewhere.
    Present = 1,
    /// Green.
    Correct = 2,
}

impl Feedback {
    fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Feedback::Absent,
            1 => Feedback::Present,
            _ => Feedback::Correct,
        }
    }

    /// Accepts `g`/`y`/`b` (or `x`, `_`, `-` for gray) and the digits
    /// `2`/`1`/`0`.
    pub fn from_letter(c: char) -> Option<Self> {
        Some(match c.to_ascii_lowercase() {
            'g' | '2' => Feedback::Correct,
            'y' | '1' => Feedback::Present,
            'b' | 'x' | '_' | '-' | '0' => Feedback::Absent,
            _ => return None,
        })
    }

    pub fn emoji(self) -> char {
        match self {
            Feedback::Absent => '⬛',
            Feedback::Present => '🟨',
            Feedback::Correct => '🟩',
        }
    }
}

/// How yellow tiles are assigned when letters repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rules {
    /// The game's rule: greens first, then each unmatched copy of a letter in
    /// the secret turns at most one guess position yellow, left to right.
    #[default]
    Standard,
    /// A guess letter is yellow whenever the secret holds it at some other
    /// position that is not itself green. Scarce duplicates are not allocated,
    /// so a guess with two stray copies of a letter the secret has once gets
    /// two yellows instead of one.
    Legacy,
}

/// Five tiles packed into one byte.
///
/// The code is a base-3 number in `0..243` with the first tile as the most
/// significant digit, so `gybbb` is `2*81 + 1*27 = 189`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// Five greens.
    pub const ALL_CORRECT: Self = Self(242);

    pub const NUM_PATTERNS: usize = 243;

    pub fn new(tiles: [Feedback; WORD_LENGTH]) -> Self {
        Self(tiles.iter().fold(0, |code, &tile| code * 3 + tile as u8))
    }

    /// Score `guess` against `secret` under [`Rules::Standard`].
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self::calculate_with(Rules::Standard, guess, secret)
    }

    pub fn calculate_with(rules: Rules, guess: &Word, secret: &Word) -> Self {
        let (guess, secret) = (guess.letters(), secret.letters());
        Self::new(match rules {
            Rules::Standard => standard(guess, secret),
            Rules::Legacy => legacy(guess, secret),
        })
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut rest = self.0;
        let mut tiles = [Feedback::Absent; WORD_LENGTH];
        for tile in tiles.iter_mut().rev() {
            *tile = Feedback::from_digit(rest % 3);
            rest /= 3;
        }
        tiles
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Read five tiles such as `"gybbb"`, `"GY___"` or `"21000"`, or a raw
    /// code such as `"189"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if (1..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse::<u8>().ok().filter(|&code| (code as usize) < Self::NUM_PATTERNS).map(Self);
        }
        let tiles: Vec<Feedback> = s.chars().map(Feedback::from_letter).collect::<Option<_>>()?;
        Some(Self::new(tiles.try_into().ok()?))
    }

    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().into_iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji_string())
    }
}

fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

fn standard(guess: &[u8; WORD_LENGTH], secret: &[u8; WORD_LENGTH]) -> [Feedback; WORD_LENGTH] {
    let mut tiles = [Feedback::Absent; WORD_LENGTH];
    // unmatched copies of each letter left in the secret
    let mut unmatched = [0u8; 26];

    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            tiles[i] = Feedback::Correct;
        } else {
            unmatched[slot(s)] += 1;
        }
    }
    for (tile, &g) in tiles.iter_mut().zip(guess) {
        if *tile == Feedback::Absent && unmatched[slot(g)] > 0 {
            unmatched[slot(g)] -= 1;
            *tile = Feedback::Present;
        }
    }

    tiles
}

fn legacy(guess: &[u8; WORD_LENGTH], secret: &[u8; WORD_LENGTH]) -> [Feedback; WORD_LENGTH] {
    let open = |j: usize| guess[j] != secret[j];
    std::array::from_fn(|i| {
        if !open(i) {
            Feedback::Correct
        } else if (0..WORD_LENGTH).any(|j| j != i && open(j) && secret[j] == guess[i]) {
            Feedback::Present
        } else {
            Feedback::Absent
        }
    })
}
