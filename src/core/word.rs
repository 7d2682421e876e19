//! Fixed-length word representation
//!
//! A Word is an immutable 5-letter lowercase ASCII word, the unit every
//! generator and the evaluator operate on.

use rustc_hash::FxHashMap;
use std::fmt;

/// Length of every word handled by the engine
pub const WORD_LEN: usize = 5;

/// An immutable 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use puzzlegen::core::Word;
    ///
    /// let word = Word::new("TIGRE").unwrap();
    /// assert_eq!(word.text(), "tigre");
    ///
    /// assert!(Word::new("trop long").is_err());
    /// assert!(Word::new("tigr3").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5; positional misuse is a programmer error.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator to honor letter multiplicity.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("tigre").unwrap();
        assert_eq!(word.text(), "tigre");
        assert_eq!(word.chars(), b"tigre");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("TIGRE").unwrap();
        assert_eq!(word.text(), "tigre");

        let word2 = Word::new("TiGrE").unwrap();
        assert_eq!(word2.text(), "tigre");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("trop long"),
            Err(WordError::InvalidLength(9))
        ));
        assert!(matches!(
            Word::new("tigr"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("tigr3").is_err()); // Number
        assert!(Word::new("tigr ").is_err()); // Space
        assert!(Word::new("tigr!").is_err()); // Punctuation
        assert!(Word::new("bêche").is_err()); // Accented letter
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("tigre").unwrap();
        assert_eq!(word.char_at(0), b't');
        assert_eq!(word.char_at(1), b'i');
        assert_eq!(word.char_at(2), b'g');
        assert_eq!(word.char_at(3), b'r');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("annee").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b'n'), Some(&2));
        assert_eq!(counts.get(&b'e'), Some(&2));
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("tigre").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("tigre").unwrap();
        assert_eq!(format!("{word}"), "tigre");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("tigre").unwrap();
        let word2 = Word::new("tigre").unwrap();
        let word3 = Word::new("TIGRE").unwrap();
        let word4 = Word::new("lions").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
