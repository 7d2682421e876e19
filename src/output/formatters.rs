//! Small formatting helpers shared by the display functions

use crate::core::LetterStatus;
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile according to its status
#[must_use]
pub fn status_tile(letter: u8, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", (letter as char).to_ascii_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green(),
        LetterStatus::Present => text.black().on_yellow(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Render a grid cell: a letter, or a blank for cells outside the lanes
#[must_use]
pub fn grid_cell(cell: Option<u8>) -> String {
    match cell {
        Some(letter) => format!(" {} ", (letter as char).to_ascii_uppercase()),
        None => "   ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cell_renders_letter_or_blank() {
        assert_eq!(grid_cell(Some(b'a')), " A ");
        assert_eq!(grid_cell(None), "   ");
    }

    #[test]
    fn status_tile_uppercases() {
        // Color codes are environment dependent; check the payload only
        let tile = status_tile(b'g', LetterStatus::Correct);
        assert!(tile.to_string().contains(" G "));
    }
}
