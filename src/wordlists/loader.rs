//! Word list loading utilities
//!
//! Load dictionaries from files or build them from embedded constants.

use crate::core::Word;
use crate::dictionary::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use puzzlegen::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_common.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Build a dictionary from a file of words, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    Ok(Dictionary::new(load_from_file(path)?))
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use puzzlegen::wordlists::loader::dictionary_from_slice;
/// use puzzlegen::wordlists::WORDS_COMMON;
///
/// let dict = dictionary_from_slice(WORDS_COMMON);
/// assert_eq!(dict.len(), WORDS_COMMON.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_strs(slice.iter().copied())
}
