//! Word lists for puzzle generation
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_COMMON, WORDS_COMMON_COUNT, WORDS_HASHTAG, WORDS_HASHTAG_COUNT};
