//! Rare-letter interest scoring
//!
//! Both generators bias word selection toward combinations carrying letters
//! from a fixed "rare" set. This only tunes puzzle quality, never correctness.

use super::word::Word;

/// Default rare-letter set, inherited from the game's lexicon
pub const DEFAULT_RARE_LETTERS: &str = "pgbvhfqyxjkwz";

/// A fixed set of letters considered interesting for puzzle quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RareLetters {
    // One bit per letter a-z
    mask: u32,
}

impl RareLetters {
    /// Build a set from lowercase ASCII letters; other characters are ignored
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut mask = 0u32;
        for b in letters.bytes() {
            if b.is_ascii_lowercase() {
                mask |= 1 << (b - b'a');
            }
        }
        Self { mask }
    }

    /// Whether the letter belongs to the set
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.mask & (1 << (letter - b'a')) != 0
    }

    /// Count rare letters among the given letters (duplicates count each time)
    #[must_use]
    pub fn count_in(&self, letters: impl IntoIterator<Item = u8>) -> usize {
        letters.into_iter().filter(|&b| self.contains(b)).count()
    }

    /// Count rare letters across all positions of a word
    #[must_use]
    pub fn count_in_word(&self, word: &Word) -> usize {
        self.count_in(word.chars().iter().copied())
    }

    /// Total rare letters across several words
    #[must_use]
    pub fn count_in_words<'a>(&self, words: impl IntoIterator<Item = &'a Word>) -> usize {
        words.into_iter().map(|w| self.count_in_word(w)).sum()
    }
}

impl Default for RareLetters {
    fn default() -> Self {
        Self::new(DEFAULT_RARE_LETTERS)
    }
}
