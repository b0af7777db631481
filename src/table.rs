//! The precomputed feedback table.
//!
//! Row `g`, column `w` holds the feedback pattern seen when guessing word `g`
//! while the secret is word `w`. The table covers the whole universe in both
//! dimensions, so it also answers which guesses stay consistent with a given
//! feedback. It is built once and only ever shared by reference.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entropy;
use crate::error::{Error, Result};
use crate::feedback::{FeedbackPattern, Rules};
use crate::vocabulary::Vocabulary;
use crate::word::Word;
use crate::WordId;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug)]
pub struct FeedbackTable {
    words: Vec<Word>,
    index: HashMap<Word, WordId>,
    solution_count: usize,
    rules: Rules,
    codes: Vec<u8>,
    guess_order: Vec<WordId>,
}

/// First line of a saved table; the raw codes follow it.
#[derive(Serialize, Deserialize)]
struct Header {
    format: u32,
    rules: Rules,
    solution_count: usize,
    words: Vec<String>,
    guess_order: Vec<WordId>,
}

impl FeedbackTable {
    /// Score every word as a guess against every word as a secret, then rank
    /// all words by how much they reveal about the solution list.
    pub fn build(vocabulary: &Vocabulary, rules: Rules) -> Result<Self> {
        let start = Instant::now();
        let words = vocabulary.words().to_vec();
        let n = check_size(words.len())?;

        let mut codes = vec![0u8; n * n];
        codes
            .par_chunks_mut(n.max(1))
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (slot, secret) in row.iter_mut().zip(&words) {
                    *slot = FeedbackPattern::calculate_with(rules, guess, secret).0;
                }
            });

        let mut table = Self::assemble(words, vocabulary.solution_count(), rules, codes)?;
        table.guess_order = entropy::order_by_information(&table);

        info!(
            "built {n}x{n} feedback table ({} solutions, {rules:?} rules) in {:.2?}",
            table.solution_count,
            start.elapsed()
        );
        Ok(table)
    }

    fn assemble(words: Vec<Word>, solution_count: usize, rules: Rules, codes: Vec<u8>) -> Result<Self> {
        let mut index = HashMap::with_capacity(words.len());
        for (id, word) in words.iter().enumerate() {
            if index.insert(*word, id as WordId).is_some() {
                return Err(Error::Artifact(format!("'{word}' appears twice")));
            }
        }
        Ok(Self {
            words,
            index,
            solution_count,
            rules,
            codes,
            guess_order: Vec::new(),
        })
    }

    /// Feedback for guessing `guess` when the secret is `secret`.
    #[inline]
    pub fn code(&self, guess: WordId, secret: WordId) -> FeedbackPattern {
        FeedbackPattern(self.codes[guess as usize * self.words.len() + secret as usize])
    }

    pub fn word(&self, id: WordId) -> Word {
        self.words[id as usize]
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Resolve a word to its index.
    pub fn lookup(&self, text: &str) -> Result<WordId> {
        Word::new(text)
            .and_then(|word| self.index.get(&word).copied())
            .ok_or_else(|| Error::UnknownWord(text.to_string()))
    }

    pub fn is_solution(&self, id: WordId) -> bool {
        (id as usize) < self.solution_count
    }

    /// Every solution index, in order.
    pub fn solutions(&self) -> Vec<WordId> {
        (0..self.solution_count).map(|id| id as WordId).collect()
    }

    pub fn solution_count(&self) -> usize {
        self.solution_count
    }

    /// Every word, most informative opening guess first.
    pub fn guess_order(&self) -> &[WordId] {
        &self.guess_order
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::read_from(BufReader::new(File::open(path)?))
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let header = Header {
            format: FORMAT_VERSION,
            rules: self.rules,
            solution_count: self.solution_count,
            words: self.words.iter().map(Word::to_string).collect(),
            guess_order: self.guess_order.clone(),
        };
        serde_json::to_writer(&mut writer, &header)?;
        writer.write_all(b"\n")?;
        writer.write_all(&self.codes)?;
        Ok(())
    }

    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let header: Header = serde_json::from_str(&line)?;

        if header.format != FORMAT_VERSION {
            return Err(Error::Artifact(format!("unsupported format version {}", header.format)));
        }
        let words = header
            .words
            .iter()
            .map(|text| text.parse())
            .collect::<Result<Vec<Word>>>()?;
        let n = check_size(words.len())?;
        if header.solution_count > n {
            return Err(Error::Artifact(format!(
                "{} solutions but only {n} words",
                header.solution_count
            )));
        }

        // The header's word count is untrusted; only buffer what the input holds.
        let expected = n * n;
        let mut codes = Vec::new();
        reader.take(expected as u64 + 1).read_to_end(&mut codes)?;
        match codes.len().cmp(&expected) {
            Ordering::Less => {
                return Err(Error::Artifact(format!(
                    "expected {expected} feedback bytes, found {}",
                    codes.len()
                )))
            }
            Ordering::Greater => {
                return Err(Error::Artifact("trailing bytes after feedback codes".to_string()));
            }
            Ordering::Equal => {}
        }
        if codes.iter().any(|&code| code as usize >= FeedbackPattern::NUM_PATTERNS) {
            return Err(Error::Artifact("feedback code out of range".to_string()));
        }

        let mut seen = vec![false; n];
        for &id in &header.guess_order {
            match seen.get_mut(id as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Error::Artifact(format!("bad guess order entry {id}"))),
            }
        }
        if header.guess_order.len() != n {
            return Err(Error::Artifact("guess order does not cover every word".to_string()));
        }

        let mut table = Self::assemble(words, header.solution_count, header.rules, codes)?;
        table.guess_order = header.guess_order;
        Ok(table)
    }
}

fn check_size(n: usize) -> Result<usize> {
    if n > WordId::MAX as usize + 1 {
        return Err(Error::TooManyWords(n));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> FeedbackTable {
        let words = |list: &[&str]| -> Vec<Word> { list.iter().map(|w| w.parse().unwrap()).collect() };
        let vocabulary = Vocabulary::new(words(&["crane", "slate", "trace"]), words(&["chomp", "slate"]));
        FeedbackTable::build(&vocabulary, Rules::Standard).unwrap()
    }

    #[test]
    fn rows_match_encoder() {
        let table = small();
        assert_eq!(table.len(), 4);
        for g in 0..4 {
            for w in 0..4 {
                let expected = FeedbackPattern::calculate(&table.word(g), &table.word(w));
                assert_eq!(table.code(g, w), expected);
            }
        }
    }

    #[test]
    fn guess_order_is_a_permutation() {
        let table = small();
        let mut order = table.guess_order().to_vec();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rejects_trailing_bytes() {
        let table = small();
        let mut bytes = Vec::new();
        table.write_to(&mut bytes).unwrap();
        bytes.push(0);
        assert!(matches!(
            FeedbackTable::read_from(bytes.as_slice()),
            Err(Error::Artifact(_))
        ));
    }
}
