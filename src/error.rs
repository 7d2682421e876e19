//! Failure taxonomy for puzzle generation
//!
//! Every generator returns one of these instead of retrying forever: bounded
//! search budgets turn unlucky draw sequences into `ExhaustedSearch`, and
//! structurally impossible inputs are reported as `DictionaryTooSmall` so a
//! caller can disable a game mode rather than spin.

use std::fmt;

use crate::jackpot::{MAX_WORDS, MIN_WORDS};

/// Why a generation request could not produce a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// No acceptable combination/permutation found within the attempt budget.
    /// Recoverable: retry, or try a richer dictionary.
    ExhaustedSearch { attempts: usize },
    /// The dictionary cannot satisfy the structural constraints at all,
    /// regardless of luck.
    DictionaryTooSmall { needed: usize, available: usize },
    /// Caller asked for a word count outside the supported 3..=5 range.
    /// Programmer error; never retried, never clamped.
    InvalidWordCount(usize),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedSearch { attempts } => {
                write!(f, "No valid puzzle found after {attempts} attempts")
            }
            Self::DictionaryTooSmall { needed, available } => {
                write!(
                    f,
                    "Dictionary too small: need at least {needed} words, have {available}"
                )
            }
            Self::InvalidWordCount(count) => {
                write!(
                    f,
                    "Word count must be between {MIN_WORDS} and {MAX_WORDS}, got {count}"
                )
            }
        }
    }
}

impl std::error::Error for GenError {}
