//! # eight-puzzle
//!
//! A 3x3 sliding-puzzle engine with a persistent best-times ranking and
//! single-slot session save/restore.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: cells hold abstract tile identifiers compared by
//!    value; rendering details (images, glyphs) never reach the engine.
//!
//! 2. **One Instance Per Game**: counters and the clock are fields of a
//!    `PuzzleEngine`, not process-wide state.
//!
//! 3. **Synchronous Core**: every operation runs inside the caller's event
//!    handler. The only scheduled effect is the 1-second clock tick, driven
//!    by the host through a cancelable `TickHandle`.
//!
//! ## Architecture
//!
//! - **Typed outcomes**: mutating calls return `MoveOutcome`; the winning
//!   move carries `CompletionStats` for the host to forward to the ranking.
//!
//! - **Abstract persistence**: both stores speak to a `KeyValueStore`
//!   (`get`/`set` of strings) holding field-named JSON records; in-memory
//!   and file-backed implementations are provided.
//!
//! - **Deterministic shuffles**: ChaCha8 behind a seed, so any game can be
//!   reproduced.
//!
//! ## Modules
//!
//! - `core`: positions, tiles, the board, RNG, configuration
//! - `engine`: the puzzle engine, clock, move outcomes, render view
//! - `store`: key-value medium, best-times ranking, session slot
//! - `error`: the crate error type

pub mod core;
pub mod engine;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Board, EngineConfig, Position, PuzzleRng, PuzzleRngState, Tile};

pub use crate::engine::{
    CompletionStats, GameClock, GameView, MoveOutcome, PuzzleEngine, TickHandle,
};

pub use crate::error::Error;

pub use crate::store::{
    FileStore, KeyValueStore, MemoryStore, RankingEntry, RankingStore, SessionSnapshot,
    SessionStore,
};
