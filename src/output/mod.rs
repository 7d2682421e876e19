//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_combination, print_feedback, print_jackpot};
