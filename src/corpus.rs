use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{CryptoError, Result};

/// A character-frequency language model built once from a reference text.
///
/// The table maps every observed char to its relative frequency; the values
/// sum to 1.0 at construction and the table is never mutated afterwards, so a
/// single `Corpus` can be shared by reference across any number of concurrent
/// scoring calls.
#[derive(Debug, Clone)]
pub struct Corpus {
    freq: HashMap<char, f64>,
}

impl Corpus {
    /// Builds the frequency table by counting every char of `text` and
    /// dividing by the total char count. An empty reference text has no
    /// denominator and is rejected.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        let mut total = 0usize;

        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return Err(CryptoError::EmptyInput);
        }

        let freq = counts
            .into_iter()
            .map(|(c, n)| (c, n as f64 / total as f64))
            .collect();

        Ok(Self { freq })
    }

    /// Relative frequency of a single char, 0.0 if the corpus never saw it.
    pub fn frequency(&self, c: char) -> f64 {
        self.freq.get(&c).copied().unwrap_or(0.0)
    }

    /// Average per-char table lookup over `text`. Not a probability, only a
    /// ranking signal: chars absent from the corpus contribute 0.0, so output
    /// full of bytes the reference text never contains scores near zero.
    pub fn score(&self, text: &str) -> Result<f64> {
        let mut sum = 0.0;
        let mut total = 0usize;

        for c in text.chars() {
            sum += self.frequency(c);
            total += 1;
        }

        if total == 0 {
            return Err(CryptoError::EmptyInput);
        }

        Ok(sum / total as f64)
    }

    /// Scores a raw decryption candidate. Invalid UTF-8 sequences become
    /// U+FFFD, a char no natural-language corpus contains, which penalizes
    /// wrong keys exactly like any other unseen char.
    pub fn score_bytes(&self, bytes: &[u8]) -> Result<f64> {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(s) => self.score(s),
            Cow::Owned(s) => self.score(&s),
        }
    }
}
