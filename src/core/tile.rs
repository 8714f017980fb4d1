//! Tile identification.
//!
//! Eight distinct tiles occupy the board; the ninth cell is empty. A cell's
//! content is therefore `Option<Tile>`, with `None` as the empty sentinel.
//!
//! Tile `n`'s designated home is position `n`: the board is solved when every
//! tile sits on its home and position 9 is empty. The identifier is an
//! abstract value compared by equality, decoupled from any rendering detail
//! (image slices, glyphs) the host might attach.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of distinct tiles.
pub const TILES: u8 = 8;

/// One of the eight puzzle tiles.
///
/// Serializes as its bare number, so a stored cell sequence reads
/// `[5, 3, 7, 1, null, 2, 8, 6, 4]`. Out-of-range stored values fail
/// deserialization, which the stores surface as snapshot corruption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

impl Tile {
    /// All eight tiles in home order.
    pub const ALL: [Tile; TILES as usize] = [
        Tile(1),
        Tile(2),
        Tile(3),
        Tile(4),
        Tile(5),
        Tile(6),
        Tile(7),
        Tile(8),
    ];

    /// Create a tile from its number.
    ///
    /// Returns `None` for anything outside 1..=8.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= TILES {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Get the tile number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The position this tile occupies in a solved board.
    #[must_use]
    pub fn home(self) -> Position {
        Position::new(self.0).expect("tile numbers are valid positions")
    }

    /// Check whether this tile's home is the given position.
    #[must_use]
    pub fn is_home(self, position: Position) -> bool {
        self.0 == position.number()
    }
}

impl TryFrom<u8> for Tile {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Tile::new(number).ok_or_else(|| format!("tile number out of range: {number}"))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
