//! Single-slot save and restore of an in-progress game.
//!
//! One snapshot slot, overwritten on each save, loaded only on explicit
//! request. Unlike the ranking, a saved game is not best-effort: corruption
//! and storage failures surface as errors so the host never silently loses
//! a player's progress.

use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineConfig, Tile, CELLS};
use crate::error::Error;

use super::kv::KeyValueStore;

/// Snapshot of an in-progress game.
///
/// The stored record is field-named JSON, e.g.
///
/// ```json
/// {
///   "tiles": [5, 3, 7, 1, null, 2, 8, 6, 4],
///   "elapsed_seconds": 74,
///   "move_count": 31,
///   "player_name": "Ada"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Cell contents in row-major order; `null` marks the empty cell.
    pub tiles: Vec<Option<Tile>>,
    /// Seconds accrued when the game was saved.
    pub elapsed_seconds: u32,
    /// Moves played when the game was saved.
    pub move_count: u32,
    /// Name the player had entered at save time.
    pub player_name: String,
}

impl SessionSnapshot {
    /// Validate the tile arrangement and build a board from it.
    ///
    /// Fails with [`Error::CorruptSnapshot`] unless the snapshot holds
    /// exactly 9 cells forming a permutation of tiles 1..=8 plus one empty.
    pub fn board(&self) -> Result<Board, Error> {
        let cells: [Option<Tile>; CELLS] = self
            .tiles
            .as_slice()
            .try_into()
            .map_err(|_| Error::CorruptSnapshot)?;
        Board::from_cells(cells)
    }
}

/// Persists the single saved-game slot through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a store using the configured session key.
    pub fn new(store: S, config: &EngineConfig) -> Self {
        Self {
            store,
            key: config.session_key.clone(),
        }
    }

    /// Create a store with an explicit key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Overwrite the slot with `snapshot`.
    ///
    /// A rejected write fails with [`Error::StorageUnavailable`]; the
    /// in-memory game is untouched and the host must surface the failure.
    pub fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), Error> {
        let payload = super::encode(snapshot)?;
        self.store.set(&self.key, &payload)
    }

    /// Load the saved slot.
    ///
    /// Fails with [`Error::NotFound`] when nothing was ever saved, or
    /// [`Error::CorruptSnapshot`] when the payload does not parse into a
    /// valid 9-cell snapshot.
    pub fn load(&self) -> Result<SessionSnapshot, Error> {
        let raw = self.store.get(&self.key)?.ok_or(Error::NotFound)?;
        let snapshot: SessionSnapshot =
            serde_json::from_str(&raw).map_err(|_| Error::CorruptSnapshot)?;
        snapshot.board()?;
        Ok(snapshot)
    }

    /// Access the underlying medium, mainly for sharing it across stores.
    pub fn store(&self) -> &S {
        &self.store
    }
}
