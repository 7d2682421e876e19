//! Immutable dictionary with letter-bucket indexing
//!
//! A `Dictionary` is constructed once from a word list and passed by
//! reference to the generators, so several independent dictionaries (e.g.
//! per locale or per game mode) can coexist in one process.

use crate::core::{WORD_LEN, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// An immutable, ordered, duplicate-free list of 5-letter words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    members: FxHashSet<[u8; WORD_LEN]>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of each word
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut members = FxHashSet::default();
        let mut unique = Vec::new();
        for word in words {
            if members.insert(*word.chars()) {
                unique.push(word);
            }
        }
        Self {
            words: unique,
            members,
        }
    }

    /// Build a dictionary from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use puzzlegen::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(["tigre", "lions", "pas-un-mot"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("tigre"));
    /// ```
    #[must_use]
    pub fn from_strs<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(words.into_iter().filter_map(|s| Word::new(s).ok()))
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at the given index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Membership check for a textual word (invalid text is simply absent)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|w| self.members.contains(w.chars()))
    }

    /// Membership check for a raw letter array
    #[inline]
    #[must_use]
    pub fn contains_chars(&self, chars: &[u8; WORD_LEN]) -> bool {
        self.members.contains(chars)
    }

    /// Partition the dictionary by the letter at `position`
    ///
    /// The returned buckets let a generator jump directly to words compatible
    /// with a required linking letter instead of scanning the whole list.
    ///
    /// # Panics
    /// Panics if `position >= 5`; positional misuse is a programmer error.
    #[must_use]
    pub fn bucket_by(&self, position: usize) -> LetterBuckets {
        assert!(position < WORD_LEN, "bucket position out of range");

        let mut buckets: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (index, word) in self.words.iter().enumerate() {
            buckets.entry(word.char_at(position)).or_default().push(index);
        }

        LetterBuckets { position, buckets }
    }
}

/// Index of dictionary words keyed by the letter at a fixed position
#[derive(Debug, Clone)]
pub struct LetterBuckets {
    position: usize,
    buckets: FxHashMap<u8, Vec<usize>>,
}

impl LetterBuckets {
    /// The position this index was built on
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Indices of words carrying `letter` at the indexed position
    ///
    /// Returns an empty slice when no word qualifies.
    #[must_use]
    pub fn candidates(&self, letter: u8) -> &[usize] {
        self.buckets
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_strs(words.iter().copied())
    }

    #[test]
    fn construction_keeps_order_and_dedupes() {
        let d = dict(&["tigre", "lions", "tigre", "sable"]);
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(0).unwrap().text(), "tigre");
        assert_eq!(d.get(1).unwrap().text(), "lions");
        assert_eq!(d.get(2).unwrap().text(), "sable");
    }

    #[test]
    fn invalid_entries_skipped() {
        let d = dict(&["tigre", "trop-long", "abc"]);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn membership() {
        let d = dict(&["tigre", "lions"]);
        assert!(d.contains("tigre"));
        assert!(d.contains("TIGRE")); // Normalized
        assert!(!d.contains("sable"));
        assert!(!d.contains("pas un mot"));
        assert!(d.contains_chars(b"lions"));
        assert!(!d.contains_chars(b"zzzzz"));
    }

    #[test]
    fn empty_dictionary() {
        let d = dict(&[]);
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert!(!d.contains("tigre"));
    }

    #[test]
    fn buckets_partition_by_position() {
        let d = dict(&["loyal", "soies", "beche", "gache"]);
        let buckets = d.bucket_by(1);

        assert_eq!(buckets.position(), 1);
        // loyal and soies share 'o' as second letter
        assert_eq!(buckets.candidates(b'o'), &[0, 1]);
        assert_eq!(buckets.candidates(b'e'), &[2]);
        assert_eq!(buckets.candidates(b'a'), &[3]);
        assert!(buckets.candidates(b'z').is_empty());
    }

    #[test]
    fn buckets_cover_every_word() {
        let d = dict(&["loyal", "soies", "beche", "gache"]);
        let buckets = d.bucket_by(0);

        let total: usize = (b'a'..=b'z').map(|l| buckets.candidates(l).len()).sum();
        assert_eq!(total, d.len());
    }

    #[test]
    #[should_panic(expected = "bucket position out of range")]
    fn bucket_position_out_of_range_panics() {
        dict(&["tigre"]).bucket_by(5);
    }
}
