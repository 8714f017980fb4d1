//! Grid position identification.
//!
//! The board is a fixed 3x3 grid addressed by positions 1..=9 in row-major
//! order:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```
//!
//! Row and column are derived from the position number:
//! `row = ceil(pos / 3)`, `col = ((pos - 1) mod 3) + 1`.
//!
//! ## Usage
//!
//! ```
//! use eight_puzzle::core::Position;
//!
//! let p5 = Position::new(5).unwrap();
//! assert_eq!(p5.row(), 2);
//! assert_eq!(p5.col(), 2);
//!
//! // Cells are legal-move neighbors when their Manhattan distance is 1
//! let p4 = Position::new(4).unwrap();
//! assert!(p5.is_adjacent(p4));
//! ```

use smallvec::SmallVec;

/// Number of rows on the board.
pub const ROWS: u8 = 3;
/// Number of columns on the board.
pub const COLS: u8 = 3;
/// Total cell count.
pub const CELLS: usize = (ROWS * COLS) as usize;

/// A cell position on the 3x3 board, 1..=9 in row-major order.
///
/// The inner value is kept private so every `Position` in circulation is
/// valid; use [`Position::new`] or [`Position::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position(u8);

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; CELLS] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// The bottom-right cell, home of the empty slot in a solved board.
    pub const LAST: Position = Position(9);

    /// Create a position from its 1-based cell number.
    ///
    /// Returns `None` for anything outside 1..=9.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= CELLS as u8 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Get the 1-based cell number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based array index for this position.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Create a position from a 0-based array index.
    ///
    /// Returns `None` for indices >= 9.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELLS {
            Some(Self(index as u8 + 1))
        } else {
            None
        }
    }

    /// Get the 1-based row of this position.
    #[must_use]
    pub const fn row(self) -> u8 {
        (self.0 - 1) / COLS + 1
    }

    /// Get the 1-based column of this position.
    #[must_use]
    pub const fn col(self) -> u8 {
        (self.0 - 1) % COLS + 1
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan_distance(self, other: Position) -> u8 {
        self.row().abs_diff(other.row()) + self.col().abs_diff(other.col())
    }

    /// Check whether another position is a legal-move neighbor.
    ///
    /// Two positions are neighbors when they differ by exactly 1 in row or
    /// column, not both.
    ///
    /// ```
    /// use eight_puzzle::core::Position;
    ///
    /// let center = Position::new(5).unwrap();
    /// assert!(center.is_adjacent(Position::new(2).unwrap()));
    /// assert!(!center.is_adjacent(Position::new(1).unwrap())); // diagonal
    /// assert!(!center.is_adjacent(center));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// All legal-move neighbors of this position.
    ///
    /// Corners have 2, edges 3, the center 4. SmallVec keeps the list off
    /// the heap.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&other| self.is_adjacent(other))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}
