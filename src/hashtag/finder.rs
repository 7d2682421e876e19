//! Randomized search for hashtag combinations
//!
//! Retry-driven constraint satisfaction: draw a horizontal word, jump through
//! the linking-letter buckets to compatible crossing words, keep the draw only
//! if it carries enough rare letters, then enumerate closing candidates for
//! the last vertical slot. The crossing equalities are satisfied by
//! construction at every step, never checked after the fact.

use rand::Rng;
use rand::prelude::IndexedRandom;

use super::{Combination, FIRST_LANE, SECOND_LANE};
use crate::core::{RareLetters, Word};
use crate::dictionary::{Dictionary, LetterBuckets};
use crate::error::GenError;

/// Word position used as the bucket key
///
/// A word's letter at this position is what it exposes to a crossing word,
/// so two words can intersect exactly when one's lane letter matches the
/// other's bucket key.
pub const LINK_POSITION: usize = 1;

/// Search budget before a draw sequence is declared hopeless
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

// Interest thresholds: a partial draw must already look promising before the
// closing word is searched, and the final combination must clear the full bar.
const PARTIAL_SCORE_MIN: usize = 2;
const FULL_SCORE_MIN: usize = 3;

/// Generator for `#`-shaped four-word combinations
///
/// Holds the dictionary and its linking-letter index; one finder can produce
/// any number of combinations.
pub struct HashtagFinder<'a> {
    dict: &'a Dictionary,
    buckets: LetterBuckets,
    rare: RareLetters,
    max_attempts: usize,
}

impl<'a> HashtagFinder<'a> {
    /// Build a finder over `dict`, indexing it once by the linking letter
    #[must_use]
    pub fn new(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            buckets: dict.bucket_by(LINK_POSITION),
            rare: RareLetters::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the rare-letter set used for interest scoring
    #[must_use]
    pub fn with_rare_letters(mut self, rare: RareLetters) -> Self {
        self.rare = rare;
        self
    }

    /// Override the attempt budget
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Find a valid combination
    ///
    /// Each attempt draws `h1`, `v1` and `h2` at random through the buckets,
    /// discards draws with fewer than 2 rare letters, then scans every
    /// closing candidate for the `v2` slot in dictionary order, accepting the
    /// first one that lifts the rare-letter score to 3. Candidates for `v2`
    /// are scanned exhaustively and deterministically per draw; variety comes
    /// from the random draws, not from the closing scan.
    ///
    /// # Errors
    /// - `DictionaryTooSmall` if fewer than 4 words are available
    /// - `ExhaustedSearch` if no draw succeeds within the attempt budget
    pub fn find<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Combination, GenError> {
        if self.dict.len() < 4 {
            return Err(GenError::DictionaryTooSmall {
                needed: 4,
                available: self.dict.len(),
            });
        }

        for _ in 0..self.max_attempts {
            if let Some(combination) = self.attempt(rng) {
                return Ok(combination);
            }
        }

        Err(GenError::ExhaustedSearch {
            attempts: self.max_attempts,
        })
    }

    /// One full draw: returns `None` when any constraint rejects it
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Combination> {
        let h1 = self.dict.words().choose(rng)?;

        // v1 crosses h1 at grid cell (1, 1): its linking letter is h1's
        // letter in the first lane.
        let v1 = self.pick_from_bucket(h1.char_at(FIRST_LANE), rng)?;

        // h2 crosses v1 at grid cell (3, 1): its linking letter is v1's
        // letter in the second lane.
        let h2 = self.pick_from_bucket(v1.char_at(SECOND_LANE), rng)?;

        if h1 == v1 || h1 == h2 || v1 == h2 {
            return None;
        }

        // Interest score of the partial draw: both horizontal words in full,
        // plus v1's cells that no horizontal word owns.
        let score = self.rare.count_in_word(h1)
            + self.rare.count_in_word(h2)
            + self.vertical_free_score(v1);

        if score < PARTIAL_SCORE_MIN {
            return None;
        }

        // v2 must close both remaining crossings at once: bucket of h1's
        // second-lane letter, narrowed to words matching h2 at the same spot.
        self.buckets
            .candidates(h1.char_at(SECOND_LANE))
            .iter()
            .filter_map(|&index| self.dict.get(index))
            .filter(|v2| v2.char_at(SECOND_LANE) == h2.char_at(SECOND_LANE))
            .filter(|v2| *v2 != h1 && *v2 != h2 && *v2 != v1)
            .find(|v2| score + self.vertical_free_score(v2) >= FULL_SCORE_MIN)
            .map(|v2| Combination::new(h1.clone(), h2.clone(), v1.clone(), v2.clone()))
    }

    /// Uniform draw from the bucket of words exposing `letter`
    fn pick_from_bucket<R: Rng + ?Sized>(&self, letter: u8, rng: &mut R) -> Option<&'a Word> {
        self.buckets
            .candidates(letter)
            .choose(rng)
            .and_then(|&index| self.dict.get(index))
    }

    /// Rare letters in a vertical word's non-intersection cells (rows 0, 2, 4)
    fn vertical_free_score(&self, word: &Word) -> usize {
        self.rare
            .count_in([word.char_at(0), word.char_at(2), word.char_at(4)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashtag::Role;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_strs(words.iter().copied())
    }

    fn assert_crossings(combi: &Combination) {
        assert_eq!(combi.h1().char_at(1), combi.v1().char_at(1));
        assert_eq!(combi.h1().char_at(3), combi.v2().char_at(1));
        assert_eq!(combi.h2().char_at(1), combi.v1().char_at(3));
        assert_eq!(combi.h2().char_at(3), combi.v2().char_at(3));
    }

    #[test]
    fn forced_four_word_dictionary() {
        // Exactly one combination set exists here (up to the symmetric
        // transposed layout); every success must use all four words, once.
        let d = dict(&["loyal", "beche", "soies", "gache"]);
        let finder = HashtagFinder::new(&d);
        let mut rng = StdRng::seed_from_u64(7);

        let combi = finder.find(&mut rng).unwrap();
        assert_crossings(&combi);

        let used: FxHashSet<&str> = combi.words().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(used.len(), 4);
        for word in ["loyal", "beche", "soies", "gache"] {
            assert!(used.contains(word), "{word} missing from combination");
        }

        let roles: Vec<_> = combi.words().iter().map(|&(_, role)| role).collect();
        assert_eq!(roles, vec![Role::H1, Role::H2, Role::V1, Role::V2]);
    }

    #[test]
    fn generated_combinations_satisfy_invariants() {
        let d = dict(&[
            "loyal", "beche", "soies", "gache", "porte", "tache", "sable", "habit", "pagne",
            "vigne", "bague", "peche", "gorge", "barbe", "patte", "hache", "vache", "poche",
        ]);
        let finder = HashtagFinder::new(&d);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..25 {
            let combi = finder.find(&mut rng).unwrap();
            assert_crossings(&combi);

            // Accepted combinations always clear the full interest bar
            let rare = RareLetters::default();
            let score = rare.count_in_word(combi.h1())
                + rare.count_in_word(combi.h2())
                + rare.count_in([
                    combi.v1().char_at(0),
                    combi.v1().char_at(2),
                    combi.v1().char_at(4),
                ])
                + rare.count_in([
                    combi.v2().char_at(0),
                    combi.v2().char_at(2),
                    combi.v2().char_at(4),
                ]);
            assert!(score >= 3, "score {score} below threshold");

            // Four distinct words
            let used: FxHashSet<&str> = combi.words().iter().map(|(w, _)| w.text()).collect();
            assert_eq!(used.len(), 4);
        }
    }

    #[test]
    fn grid_round_trip_reproduces_words() {
        let d = dict(&["loyal", "beche", "soies", "gache"]);
        let finder = HashtagFinder::new(&d);
        let mut rng = StdRng::seed_from_u64(3);

        let combi = finder.find(&mut rng).unwrap();
        let words = Combination::words_from_grid(&combi.grid()).unwrap();
        assert_eq!(&words[0], combi.h1().chars());
        assert_eq!(&words[1], combi.h2().chars());
        assert_eq!(&words[2], combi.v1().chars());
        assert_eq!(&words[3], combi.v2().chars());
    }

    #[test]
    fn too_small_dictionary_reported_distinctly() {
        let d = dict(&["loyal", "beche", "soies"]);
        let finder = HashtagFinder::new(&d);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            finder.find(&mut rng),
            Err(GenError::DictionaryTooSmall {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn exhausted_search_reported_after_budget() {
        // Four words with no rare letters at all: structurally linkable but
        // the interest threshold can never be met.
        let d = dict(&["aimer", "amant", "maree", "ramer"]);
        let finder = HashtagFinder::new(&d).with_max_attempts(50);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            finder.find(&mut rng),
            Err(GenError::ExhaustedSearch { attempts: 50 })
        );
    }
}
