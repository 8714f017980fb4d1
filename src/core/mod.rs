//! Core puzzle types: positions, tiles, the board, RNG, configuration.
//!
//! This module contains the value types the rest of the crate is built on.
//! Everything here is plain data with its invariants enforced at
//! construction; mutation policy lives in `engine`.

pub mod board;
pub mod config;
pub mod position;
pub mod rng;
pub mod tile;

pub use board::Board;
pub use config::EngineConfig;
pub use position::{Position, CELLS, COLS, ROWS};
pub use rng::{PuzzleRng, PuzzleRngState};
pub use tile::{Tile, TILES};
