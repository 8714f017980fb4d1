//! The puzzle engine: one instance per active game.
//!
//! `PuzzleEngine` owns the board, the move counter, and the clock, and is
//! the only thing that mutates them. Hosts forward user actions in
//! (`new_game`, `attempt_move`, clock ticks) and redraw from [`view`] after
//! every mutation. All operations are synchronous; nothing here blocks or
//! spawns.
//!
//! ## Usage
//!
//! ```
//! use eight_puzzle::core::EngineConfig;
//! use eight_puzzle::engine::PuzzleEngine;
//!
//! let mut engine = PuzzleEngine::with_seed(EngineConfig::default(), 42);
//! let handle = engine.new_game();
//!
//! // The host's 1 s timer drives the clock
//! engine.tick(handle);
//! assert_eq!(engine.elapsed_seconds(), 1);
//! ```
//!
//! [`view`]: PuzzleEngine::view

use crate::core::{Board, EngineConfig, Position, PuzzleRng};
use crate::error::Error;
use crate::store::SessionSnapshot;

use super::clock::{GameClock, TickHandle};
use super::outcome::{CompletionStats, GameView, MoveOutcome};

/// Owns and exclusively mutates one game's state.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    config: EngineConfig,
    board: Board,
    move_count: u32,
    clock: GameClock,
    solved: bool,
    rng: PuzzleRng,
}

impl PuzzleEngine {
    /// Create an engine with an entropy-seeded shuffle source.
    ///
    /// The board starts solved and the clock stopped; call
    /// [`PuzzleEngine::new_game`] to shuffle and start playing.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, PuzzleRng::from_entropy())
    }

    /// Create an engine with a fixed shuffle seed, for reproducible games.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, PuzzleRng::new(seed))
    }

    fn with_rng(config: EngineConfig, rng: PuzzleRng) -> Self {
        Self {
            config,
            board: Board::solved(),
            move_count: 0,
            clock: GameClock::new(),
            solved: false,
            rng,
        }
    }

    // === Accessors ===

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves played this game.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Seconds accrued this game.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    /// Whether the clock is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Whether the game has been won. Terminal until the next
    /// `new_game`/`restore_from`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Snapshot of everything a host needs to redraw.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            cells: *self.board.cells(),
            move_count: self.move_count,
            elapsed_seconds: self.clock.elapsed_seconds(),
            running: self.clock.is_running(),
            solved: self.solved,
        }
    }

    // === Game flow ===

    /// Start a new game: shuffle, zero the counters, restart the clock.
    ///
    /// The shuffle is one uniform Fisher-Yates permutation of all nine
    /// cells. It is not constrained to solvable arrangements. The returned
    /// handle supersedes any earlier one, so a still-firing timer from the
    /// previous game stops counting.
    pub fn new_game(&mut self) -> TickHandle {
        let mut cells = *Board::solved().cells();
        self.rng.shuffle(&mut cells);
        self.board = Board::from_cells(cells).expect("shuffling preserves the cell multiset");

        self.move_count = 0;
        self.solved = false;
        self.clock.reset();
        self.clock.start()
    }

    /// Try to slide the tile at `position` into the empty cell.
    ///
    /// Rejected without any state change when the game is already solved,
    /// the clicked cell is the empty one, or the cell is not
    /// Manhattan-adjacent to the empty cell. A legal move swaps the two
    /// cells, counts it, and re-checks the win condition; the winning move
    /// stops the clock and carries the run's stats out for the host to
    /// record.
    pub fn attempt_move(&mut self, position: Position) -> MoveOutcome {
        if self.solved || self.board.get(position).is_none() {
            return MoveOutcome::Rejected;
        }

        let empty = self.board.empty_position();
        if !position.is_adjacent(empty) {
            return MoveOutcome::Rejected;
        }

        self.board.swap(position, empty);
        self.move_count += 1;

        if self.board.is_solved() {
            self.solved = true;
            self.clock.stop();
            MoveOutcome::Solved(CompletionStats {
                elapsed_seconds: self.clock.elapsed_seconds(),
                move_count: self.move_count,
            })
        } else {
            MoveOutcome::Moved
        }
    }

    /// Count one second of play. Called by the host's 1 s timer.
    ///
    /// Returns `false` when the tick was discarded (game over, or `handle`
    /// comes from a superseded game).
    pub fn tick(&mut self, handle: TickHandle) -> bool {
        self.clock.tick(handle)
    }

    /// Stop the clock without finishing the game (host teardown, pause).
    pub fn cancel_clock(&mut self) {
        self.clock.stop();
    }

    // === Session snapshots ===

    /// Capture the current game for [`SessionStore::save`].
    ///
    /// A blank `player_name` resolves to the configured default.
    ///
    /// [`SessionStore::save`]: crate::store::SessionStore::save
    #[must_use]
    pub fn snapshot(&self, player_name: &str) -> SessionSnapshot {
        SessionSnapshot {
            tiles: self.board.cells().to_vec(),
            elapsed_seconds: self.clock.elapsed_seconds(),
            move_count: self.move_count,
            player_name: self.config.resolve_player_name(player_name),
        }
    }

    /// Replace the current game with a saved one and restart the clock.
    ///
    /// Fails with [`Error::CorruptSnapshot`] when the snapshot is not a
    /// valid 9-cell arrangement; the current game is untouched in that
    /// case.
    pub fn restore_from(&mut self, snapshot: &SessionSnapshot) -> Result<TickHandle, Error> {
        let board = snapshot.board()?;

        self.board = board;
        self.move_count = snapshot.move_count;
        self.solved = false;
        self.clock.set_elapsed(snapshot.elapsed_seconds);
        Ok(self.clock.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, CELLS};

    fn engine() -> PuzzleEngine {
        PuzzleEngine::with_seed(EngineConfig::default(), 42)
    }

    fn snapshot_of(tiles: [u8; CELLS]) -> SessionSnapshot {
        SessionSnapshot {
            tiles: tiles.iter().map(|&n| Tile::new(n)).collect(),
            elapsed_seconds: 0,
            move_count: 0,
            player_name: "Ada".to_string(),
        }
    }

    fn pos(number: u8) -> Position {
        Position::new(number).unwrap()
    }

    #[test]
    fn test_new_game_preserves_cell_multiset() {
        let mut engine = engine();
        engine.new_game();

        let mut numbers: Vec<u8> = engine
            .board()
            .cells()
            .iter()
            .map(|cell| cell.map_or(0, Tile::number))
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_new_game_resets_counters() {
        let mut engine = engine();
        let handle = engine.new_game();
        engine.tick(handle);
        let reachable = engine.board().empty_position().neighbors()[0];
        let _ = engine.attempt_move(reachable);

        engine.new_game();
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.elapsed_seconds(), 0);
        assert!(engine.is_running());
        assert!(!engine.is_solved());
    }

    #[test]
    fn test_old_timer_stops_counting_after_new_game() {
        let mut engine = engine();
        let old = engine.new_game();
        let new = engine.new_game();

        assert!(!engine.tick(old));
        assert!(engine.tick(new));
        assert_eq!(engine.elapsed_seconds(), 1);
    }

    #[test]
    fn test_adjacent_move_swaps_and_counts() {
        let mut engine = engine();
        engine
            .restore_from(&snapshot_of([5, 3, 7, 1, 0, 2, 8, 6, 4]))
            .unwrap();

        let outcome = engine.attempt_move(pos(4));
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.board().get(pos(4)), None);
        assert_eq!(engine.board().get(pos(5)), Tile::new(1));
    }

    #[test]
    fn test_non_adjacent_move_is_rejected_unchanged() {
        let mut engine = engine();
        engine
            .restore_from(&snapshot_of([5, 3, 7, 1, 0, 2, 8, 6, 4]))
            .unwrap();
        let before = *engine.board();

        // Position 9 is two steps from the empty cell at 5
        let outcome = engine.attempt_move(pos(9));
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(*engine.board(), before);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_diagonal_move_is_rejected() {
        let mut engine = engine();
        engine
            .restore_from(&snapshot_of([5, 3, 7, 1, 0, 2, 8, 6, 4]))
            .unwrap();

        // Position 1 is diagonal to the empty cell at 5
        assert_eq!(engine.attempt_move(pos(1)), MoveOutcome::Rejected);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_clicking_empty_cell_is_rejected() {
        let mut engine = engine();
        engine
            .restore_from(&snapshot_of([5, 3, 7, 1, 0, 2, 8, 6, 4]))
            .unwrap();

        assert_eq!(engine.attempt_move(pos(5)), MoveOutcome::Rejected);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_winning_move_emits_stats_and_stops_clock() {
        let mut engine = engine();
        let handle = engine
            .restore_from(&snapshot_of([1, 2, 3, 4, 5, 6, 7, 0, 8]))
            .unwrap();
        engine.tick(handle);
        engine.tick(handle);

        let outcome = engine.attempt_move(pos(9));
        assert_eq!(
            outcome,
            MoveOutcome::Solved(CompletionStats {
                elapsed_seconds: 2,
                move_count: 1,
            })
        );
        assert!(engine.is_solved());
        assert!(!engine.is_running());
        assert!(!engine.tick(handle));
    }

    #[test]
    fn test_moves_after_solve_are_rejected() {
        let mut engine = engine();
        engine
            .restore_from(&snapshot_of([1, 2, 3, 4, 5, 6, 7, 0, 8]))
            .unwrap();
        let _ = engine.attempt_move(pos(9));

        assert_eq!(engine.attempt_move(pos(8)), MoveOutcome::Rejected);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_restore_adopts_counters_and_restarts_clock() {
        let mut engine = engine();
        let mut snapshot = snapshot_of([5, 3, 7, 1, 0, 2, 8, 6, 4]);
        snapshot.elapsed_seconds = 74;
        snapshot.move_count = 31;

        let handle = engine.restore_from(&snapshot).unwrap();
        assert_eq!(engine.move_count(), 31);
        assert_eq!(engine.elapsed_seconds(), 74);
        assert!(engine.is_running());

        engine.tick(handle);
        assert_eq!(engine.elapsed_seconds(), 75);
    }

    #[test]
    fn test_restore_rejects_corrupt_snapshot_untouched() {
        let mut engine = engine();
        let handle = engine.new_game();
        let before = engine.view();

        let mut bad = snapshot_of([5, 3, 7, 1, 0, 2, 8, 6, 4]);
        bad.tiles.truncate(3);
        let result = engine.restore_from(&bad);

        assert!(matches!(result, Err(Error::CorruptSnapshot)));
        assert_eq!(engine.view(), before);
        // The previous game's timer is still live
        assert!(engine.tick(handle));
    }

    #[test]
    fn test_snapshot_resolves_blank_player_name() {
        let mut engine = engine();
        engine.new_game();

        assert_eq!(engine.snapshot("  ").player_name, "Anónimo");
        assert_eq!(engine.snapshot("Ada").player_name, "Ada");
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut engine = engine();
        let handle = engine.new_game();
        engine.tick(handle);
        let reachable = engine.board().empty_position().neighbors()[0];
        let _ = engine.attempt_move(reachable);

        let snapshot = engine.snapshot("Ada");

        let mut other = PuzzleEngine::with_seed(EngineConfig::default(), 7);
        other.restore_from(&snapshot).unwrap();
        assert_eq!(other.board(), engine.board());
        assert_eq!(other.move_count(), engine.move_count());
        assert_eq!(other.elapsed_seconds(), engine.elapsed_seconds());
    }

    #[test]
    fn test_view_reflects_state() {
        let mut engine = engine();
        let handle = engine.new_game();
        engine.tick(handle);

        let view = engine.view();
        assert_eq!(view.cells, *engine.board().cells());
        assert_eq!(view.elapsed_seconds, 1);
        assert_eq!(view.move_count, 0);
        assert!(view.running);
        assert!(!view.solved);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a = PuzzleEngine::with_seed(EngineConfig::default(), 123);
        let mut b = PuzzleEngine::with_seed(EngineConfig::default(), 123);
        a.new_game();
        b.new_game();
        assert_eq!(a.board(), b.board());
    }
}
