//! Jackpot word selection and controlled column shuffling
//!
//! Two retry-driven phases: select N mutually column-distinct words with
//! enough rare letters, then scramble every column except the anchor with a
//! permutation that is never the identity and keeps at most one letter in
//! place, under a global budget of such "accidental" placements.

use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

use super::{ANCHOR_COLUMN, JackpotPuzzle, MAX_WORDS, MIN_WORDS};
use crate::core::{RareLetters, WORD_LEN, Word};
use crate::dictionary::Dictionary;
use crate::error::GenError;

/// Selection budget before the draw sequence is declared hopeless
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Rejection-sampling budget for a single column permutation
pub const MAX_PERMUTATION_DRAWS: usize = 1_000;

/// Generator for jackpot puzzles
pub struct JackpotShuffler<'a> {
    dict: &'a Dictionary,
    rare: RareLetters,
    max_attempts: usize,
}

impl<'a> JackpotShuffler<'a> {
    /// Build a shuffler over `dict`
    #[must_use]
    pub fn new(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            rare: RareLetters::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the rare-letter set used for the quality heuristic
    #[must_use]
    pub fn with_rare_letters(mut self, rare: RareLetters) -> Self {
        self.rare = rare;
        self
    }

    /// Override the selection attempt budget
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate a puzzle of `word_count` words (3 to 5)
    ///
    /// # Errors
    /// - `InvalidWordCount` if `word_count` is outside 3..=5 (never clamped)
    /// - `DictionaryTooSmall` if fewer than `word_count` distinct words exist
    /// - `ExhaustedSearch` if selection or shuffling runs out of budget
    pub fn generate<R: Rng + ?Sized>(
        &self,
        word_count: usize,
        rng: &mut R,
    ) -> Result<JackpotPuzzle<'a>, GenError> {
        if !(MIN_WORDS..=MAX_WORDS).contains(&word_count) {
            return Err(GenError::InvalidWordCount(word_count));
        }
        if self.dict.len() < word_count {
            return Err(GenError::DictionaryTooSmall {
                needed: word_count,
                available: self.dict.len(),
            });
        }

        let originals = self.select_words(word_count, rng)?;
        let permutations = Self::scramble(word_count, rng)?;

        Ok(JackpotPuzzle::new(self.dict, originals, permutations))
    }

    /// Selection phase: N distinct, column-distinct, interesting words
    fn select_words<R: Rng + ?Sized>(
        &self,
        word_count: usize,
        rng: &mut R,
    ) -> Result<Vec<Word>, GenError> {
        for _ in 0..self.max_attempts {
            let selected: Vec<&Word> = self
                .dict
                .words()
                .choose_multiple(rng, word_count)
                .collect();

            if !columns_pairwise_distinct(&selected) {
                continue;
            }

            // Quality heuristic, not correctness: at least one rare letter
            // per word on average.
            if self.rare.count_in_words(selected.iter().copied()) < word_count {
                continue;
            }

            return Ok(selected.into_iter().cloned().collect());
        }

        Err(GenError::ExhaustedSearch {
            attempts: self.max_attempts,
        })
    }

    /// Shuffle phase: one permutation per non-anchor column
    ///
    /// Each accepted permutation is non-identity with at most one fixed
    /// point; fixed points draw on a shared budget of `word_count - 1` across
    /// the whole puzzle, after which only derangements are accepted.
    fn scramble<R: Rng + ?Sized>(
        word_count: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<usize>>, GenError> {
        let mut budget = word_count - 1;
        let mut permutations = Vec::with_capacity(WORD_LEN);
        permutations.push((0..word_count).collect()); // Anchor column stays put

        for _ in ANCHOR_COLUMN + 1..WORD_LEN {
            permutations.push(draw_permutation(word_count, &mut budget, rng)?);
        }

        Ok(permutations)
    }
}

/// Rejection-sample one acceptable column permutation
fn draw_permutation<R: Rng + ?Sized>(
    word_count: usize,
    budget: &mut usize,
    rng: &mut R,
) -> Result<Vec<usize>, GenError> {
    for _ in 0..MAX_PERMUTATION_DRAWS {
        let mut permutation: Vec<usize> = (0..word_count).collect();
        permutation.shuffle(rng);

        let fixed_points = permutation
            .iter()
            .enumerate()
            .filter(|&(row, &from)| row == from)
            .count();

        match fixed_points {
            0 => return Ok(permutation),
            1 if *budget > 0 => {
                *budget -= 1;
                return Ok(permutation);
            }
            // Identity (all fixed) or too many accidental placements
            _ => {}
        }
    }

    Err(GenError::ExhaustedSearch {
        attempts: MAX_PERMUTATION_DRAWS,
    })
}

/// Whether the selected words have pairwise-distinct letters in every column
fn columns_pairwise_distinct(words: &[&Word]) -> bool {
    (0..WORD_LEN).all(|column| {
        let letters: FxHashSet<u8> = words.iter().map(|w| w.char_at(column)).collect();
        letters.len() == words.len()
    })
}
