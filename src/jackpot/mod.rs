//! Jackpot puzzles: column-scrambled word sets
//!
//! A jackpot puzzle is N words (3 to 5) whose letters were permuted within
//! each column except the first. The player swaps letters inside a column to
//! restore the originals. Column letters are pairwise distinct across the N
//! words, so every column permutation is unambiguous.

mod shuffler;

pub use shuffler::{DEFAULT_MAX_ATTEMPTS, JackpotShuffler, MAX_PERMUTATION_DRAWS};

use crate::core::{WORD_LEN, Word};
use crate::dictionary::Dictionary;

/// Minimum number of words in a jackpot puzzle
pub const MIN_WORDS: usize = 3;
/// Maximum number of words in a jackpot puzzle
pub const MAX_WORDS: usize = 5;

/// Column left unpermuted so the puzzle has a stable visual anchor
pub const ANCHOR_COLUMN: usize = 0;

/// One word of a jackpot puzzle: the target plus its scrambled working copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JackpotRow {
    original: Word,
    current: [u8; WORD_LEN],
    valid: bool,
}

impl JackpotRow {
    /// The target word this row must be restored to
    #[must_use]
    pub const fn original(&self) -> &Word {
        &self.original
    }

    /// The working copy's letters as currently arranged
    #[must_use]
    pub const fn current(&self) -> &[u8; WORD_LEN] {
        &self.current
    }

    /// The working copy as text
    #[must_use]
    pub fn current_text(&self) -> String {
        // Letters come from validated words, always ASCII
        self.current.iter().map(|&b| b as char).collect()
    }

    /// Whether the working copy happens to be a dictionary word
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the working copy matches the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        &self.current == self.original.chars()
    }
}

/// Lifecycle of a single puzzle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleState {
    /// Still scrambled; swaps are accepted
    Ready,
    /// Every row restored; terminal, swaps are rejected
    Won,
}

/// A live jackpot puzzle instance
///
/// Owns the scrambled working copies; the dictionary is only borrowed for
/// word-validity checks and is never mutated.
#[derive(Debug, Clone)]
pub struct JackpotPuzzle<'a> {
    dict: &'a Dictionary,
    rows: Vec<JackpotRow>,
    // Scramble record: permutations[c][row] is the original row whose letter
    // starts in `row` at column c. permutations[0] is the identity.
    permutations: Vec<Vec<usize>>,
}

impl<'a> JackpotPuzzle<'a> {
    /// Assemble a puzzle from selected words and per-column permutations
    pub(crate) fn new(
        dict: &'a Dictionary,
        originals: Vec<Word>,
        permutations: Vec<Vec<usize>>,
    ) -> Self {
        debug_assert_eq!(permutations.len(), WORD_LEN);
        debug_assert!(permutations.iter().all(|p| p.len() == originals.len()));

        let rows = originals
            .iter()
            .enumerate()
            .map(|(row, original)| {
                let mut current = [0u8; WORD_LEN];
                for (column, permutation) in permutations.iter().enumerate() {
                    current[column] = originals[permutation[row]].char_at(column);
                }
                JackpotRow {
                    original: original.clone(),
                    valid: dict.contains_chars(&current),
                    current,
                }
            })
            .collect();

        Self {
            dict,
            rows,
            permutations,
        }
    }

    /// Number of words in the puzzle
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, original selection order
    #[must_use]
    pub fn rows(&self) -> &[JackpotRow] {
        &self.rows
    }

    /// The permutation the scramble applied at `column`
    ///
    /// Entry `row` names the original row whose letter the scramble placed in
    /// `row`. The anchor column always reports the identity.
    ///
    /// # Panics
    /// Panics if `column >= 5`.
    #[must_use]
    pub fn column_permutation(&self, column: usize) -> &[usize] {
        &self.permutations[column]
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> PuzzleState {
        if self.rows.iter().all(JackpotRow::is_solved) {
            PuzzleState::Won
        } else {
            PuzzleState::Ready
        }
    }

    /// Whether the puzzle is solved
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state() == PuzzleState::Won
    }

    /// Swap the letters of two rows within one column
    ///
    /// Returns `true` if the swap was applied. A swap on a won puzzle is
    /// rejected (the `Won` state is terminal); a no-op swap of a row with
    /// itself is applied trivially.
    ///
    /// # Panics
    /// Panics if `column >= 5` or either row index is out of range;
    /// out-of-bounds indices are programmer errors.
    pub fn swap(&mut self, column: usize, row_a: usize, row_b: usize) -> bool {
        assert!(column < WORD_LEN, "column out of range");
        assert!(
            row_a < self.rows.len() && row_b < self.rows.len(),
            "row out of range"
        );

        if self.is_won() {
            return false;
        }

        let letter_a = self.rows[row_a].current[column];
        let letter_b = self.rows[row_b].current[column];
        self.rows[row_a].current[column] = letter_b;
        self.rows[row_b].current[column] = letter_a;

        for row in [row_a, row_b] {
            self.rows[row].valid = self.dict.contains_chars(&self.rows[row].current);
        }

        true
    }
}
