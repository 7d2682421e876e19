//! Core domain types shared by all three games

pub mod rare;
pub mod status;
pub mod word;

pub use rare::RareLetters;
pub use status::{Feedback, LetterStatus};
pub use word::{WORD_LEN, Word, WordError};
