//! Hashtag crossword combinations
//!
//! Four 5-letter words laid out as a `#`: two horizontal words at grid rows
//! 1 and 3, two vertical words at grid columns 1 and 3, agreeing on the four
//! cells where they cross. The finder enforces the crossing equalities
//! constructively; this module holds the result type and its grid view.

mod finder;

pub use finder::{DEFAULT_MAX_ATTEMPTS, HashtagFinder, LINK_POSITION};

use crate::core::{WORD_LEN, Word};
use std::fmt;

/// Grid row of the first horizontal word / grid column of the first vertical
pub const FIRST_LANE: usize = 1;
/// Grid row of the second horizontal word / grid column of the second vertical
pub const SECOND_LANE: usize = 3;

/// Role a word plays in the `#` layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Horizontal word at grid row 1
    H1,
    /// Horizontal word at grid row 3
    H2,
    /// Vertical word at grid column 1
    V1,
    /// Vertical word at grid column 3
    V2,
}

impl Role {
    /// The fixed grid row (horizontal roles) or column (vertical roles)
    #[must_use]
    pub const fn lane(self) -> usize {
        match self {
            Self::H1 | Self::V1 => FIRST_LANE,
            Self::H2 | Self::V2 => SECOND_LANE,
        }
    }

    /// Whether the role runs horizontally
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::H1 | Self::H2)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::V1 => "V1",
            Self::V2 => "V2",
        };
        write!(f, "{name}")
    }
}

/// Four words forming a valid `#` lattice
///
/// Invariant, guaranteed at construction: each horizontal word agrees with
/// each vertical word on their shared cell, i.e.
/// `h1[1]==v1[1]`, `h1[3]==v2[1]`, `h2[1]==v1[3]`, `h2[3]==v2[3]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    h1: Word,
    h2: Word,
    v1: Word,
    v2: Word,
}

impl Combination {
    /// Assemble a combination, checking the four crossing equalities
    pub(crate) fn new(h1: Word, h2: Word, v1: Word, v2: Word) -> Self {
        debug_assert_eq!(h1.char_at(FIRST_LANE), v1.char_at(FIRST_LANE));
        debug_assert_eq!(h1.char_at(SECOND_LANE), v2.char_at(FIRST_LANE));
        debug_assert_eq!(h2.char_at(FIRST_LANE), v1.char_at(SECOND_LANE));
        debug_assert_eq!(h2.char_at(SECOND_LANE), v2.char_at(SECOND_LANE));
        Self { h1, h2, v1, v2 }
    }

    /// First horizontal word (grid row 1)
    #[must_use]
    pub const fn h1(&self) -> &Word {
        &self.h1
    }

    /// Second horizontal word (grid row 3)
    #[must_use]
    pub const fn h2(&self) -> &Word {
        &self.h2
    }

    /// First vertical word (grid column 1)
    #[must_use]
    pub const fn v1(&self) -> &Word {
        &self.v1
    }

    /// Second vertical word (grid column 3)
    #[must_use]
    pub const fn v2(&self) -> &Word {
        &self.v2
    }

    /// The word filling the given role
    #[must_use]
    pub const fn word(&self, role: Role) -> &Word {
        match role {
            Role::H1 => &self.h1,
            Role::H2 => &self.h2,
            Role::V1 => &self.v1,
            Role::V2 => &self.v2,
        }
    }

    /// All four words with their roles, in `H1, H2, V1, V2` order
    #[must_use]
    pub fn words(&self) -> [(&Word, Role); 4] {
        [
            (&self.h1, Role::H1),
            (&self.h2, Role::H2),
            (&self.v1, Role::V1),
            (&self.v2, Role::V2),
        ]
    }

    /// Render the combination as a 5x5 sparse grid of letter cells
    ///
    /// Cells outside the four word lanes are `None`. Intersection cells are
    /// owned by both their horizontal and their vertical word; the crossing
    /// invariant makes the letter unambiguous.
    #[must_use]
    pub fn grid(&self) -> [[Option<u8>; WORD_LEN]; WORD_LEN] {
        let mut grid = [[None; WORD_LEN]; WORD_LEN];

        for col in 0..WORD_LEN {
            grid[FIRST_LANE][col] = Some(self.h1.char_at(col));
            grid[SECOND_LANE][col] = Some(self.h2.char_at(col));
        }
        for row in 0..WORD_LEN {
            grid[row][FIRST_LANE] = Some(self.v1.char_at(row));
            grid[row][SECOND_LANE] = Some(self.v2.char_at(row));
        }

        grid
    }

    /// Read the four words back out of a rendered grid
    ///
    /// Round-trips with [`Combination::grid`]; useful for checking that a
    /// grid produced elsewhere still encodes this combination.
    #[must_use]
    pub fn words_from_grid(
        grid: &[[Option<u8>; WORD_LEN]; WORD_LEN],
    ) -> Option<[[u8; WORD_LEN]; 4]> {
        let mut h1 = [0u8; WORD_LEN];
        let mut h2 = [0u8; WORD_LEN];
        let mut v1 = [0u8; WORD_LEN];
        let mut v2 = [0u8; WORD_LEN];

        for i in 0..WORD_LEN {
            h1[i] = grid[FIRST_LANE][i]?;
            h2[i] = grid[SECOND_LANE][i]?;
            v1[i] = grid[i][FIRST_LANE]?;
            v2[i] = grid[i][SECOND_LANE]?;
        }

        Some([h1, h2, v1, v2])
    }
}
