//! Display functions for generated puzzles

use super::formatters::{grid_cell, status_tile};
use crate::core::{Feedback, Word};
use crate::hashtag::Combination;
use crate::jackpot::JackpotPuzzle;
use colored::Colorize;

/// Print a hashtag combination as its 5x5 grid plus the role list
pub fn print_combination(combination: &Combination) {
    println!("\n{}", "─".repeat(40).cyan());

    for row in combination.grid() {
        let line: String = row.iter().map(|&cell| grid_cell(cell)).collect();
        println!("{line}");
    }

    println!("{}", "─".repeat(40).cyan());
    for (word, role) in combination.words() {
        println!(
            "{}  {}",
            role.to_string().bright_yellow().bold(),
            word.text().to_uppercase()
        );
    }
}

/// Print a jackpot puzzle: scrambled working copies next to their targets
pub fn print_jackpot(puzzle: &JackpotPuzzle<'_>, reveal: bool) {
    println!("\n{}", "─".repeat(40).cyan());

    for row in puzzle.rows() {
        let current = row.current_text().to_uppercase();
        let marker = if row.is_valid() {
            "word!".green().bold()
        } else {
            "     ".normal()
        };

        if reveal {
            println!(
                "{current}  {marker}  (target: {})",
                row.original().text().to_uppercase().dimmed()
            );
        } else {
            println!("{current}  {marker}");
        }
    }

    println!("{}", "─".repeat(40).cyan());
    println!("Swap letters within a column to restore the words.");
}

/// Print evaluator feedback for a guess as colored tiles
pub fn print_feedback(guess: &Word, feedback: &Feedback) {
    let tiles: Vec<String> = guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| status_tile(letter, status).to_string())
        .collect();

    println!("{}  {}", tiles.join(""), feedback.to_emoji());
}
