//! Puzzle generation engine for a suite of 5-letter word games
//!
//! Provides the randomized constraint-satisfaction generators behind three
//! casual word games: a Wordle-style letter evaluator, a `#`-shaped crossword
//! ("hashtag") finder, and a column-shuffle ("jackpot") puzzle builder.
//!
//! # Quick Start
//!
//! ```rust
//! use puzzlegen::core::{Word, Feedback, LetterStatus};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("carte").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.statuses()[0], LetterStatus::Correct);
//! ```
//!
//! # Generating a puzzle
//!
//! ```rust,no_run
//! use puzzlegen::dictionary::Dictionary;
//! use puzzlegen::hashtag::HashtagFinder;
//! use puzzlegen::wordlists::WORDS_HASHTAG;
//!
//! let dict = Dictionary::from_strs(WORDS_HASHTAG.iter().copied());
//! let finder = HashtagFinder::new(&dict);
//! let combination = finder.find(&mut rand::rng()).unwrap();
//! println!("H1 is {}", combination.h1());
//! ```

// Core domain types
pub mod core;

// Immutable word list with letter-bucket indexing
pub mod dictionary;

// Generation failure taxonomy
pub mod error;

// Hashtag crossword combination search
pub mod hashtag;

// Jackpot word selection and column shuffling
pub mod jackpot;

// Terminal output formatting
pub mod output;

// Word lists
pub mod wordlists;
