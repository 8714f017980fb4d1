//! Move outcomes and the render view.
//!
//! Mutating engine operations return typed outcomes instead of firing
//! callbacks: the host calls synchronously, inspects the result, and redraws
//! from [`GameView`]. A completed run carries its stats in
//! [`MoveOutcome::Solved`] for the host to forward to the ranking store.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Tile, CELLS};

/// Result of an [`attempt_move`] call.
///
/// [`attempt_move`]: super::PuzzleEngine::attempt_move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// The move was ignored: game already solved, the empty cell was
    /// clicked, or the cell is not adjacent to the empty cell. State is
    /// unchanged.
    Rejected,
    /// The clicked cell slid into the empty slot.
    Moved,
    /// The move completed the puzzle.
    Solved(CompletionStats),
}

impl MoveOutcome {
    /// Check if the move was ignored.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected)
    }

    /// Check if the move finished the game.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, MoveOutcome::Solved(_))
    }
}

/// Stats of a finished run, emitted exactly once per game on the winning
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStats {
    /// Seconds accrued when the final move landed.
    pub elapsed_seconds: u32,
    /// Total legal moves played.
    pub move_count: u32,
}

/// Everything a host needs to redraw after a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameView {
    /// Cell contents in row-major order; `None` is the empty cell.
    pub cells: [Option<Tile>; CELLS],
    /// Legal moves played this game.
    pub move_count: u32,
    /// Seconds accrued this game.
    pub elapsed_seconds: u32,
    /// Whether the clock is counting.
    pub running: bool,
    /// Whether the game has been won (terminal).
    pub solved: bool,
}

impl GameView {
    /// Content of one cell.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Tile> {
        self.cells[position.index()]
    }
}
