//! Best-times ranking.
//!
//! A bounded table of the fastest completions, loaded at startup, appended
//! and re-sorted on each win, persisted through the key-value medium. The
//! ranking is best-effort: a malformed or unreadable payload is discarded
//! (with a warning) and play continues with an empty table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;
use crate::engine::CompletionStats;
use crate::error::Error;

use super::kv::KeyValueStore;

/// One completed run on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Player name, never blank (blank input resolves to the configured
    /// default before the entry is built).
    pub player_name: String,
    /// Completion time in seconds. The sort key.
    pub elapsed_seconds: u32,
    /// Moves the run took.
    pub move_count: u32,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}

impl RankingEntry {
    /// Build an entry with an explicit timestamp.
    pub fn new(
        player_name: impl Into<String>,
        elapsed_seconds: u32,
        move_count: u32,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            elapsed_seconds,
            move_count,
            completed_at,
        }
    }
}

impl std::fmt::Display for RankingEntry {
    /// Leaderboard line: `Ada - 45s - 80 mov. (2026-08-06 10:30:00)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}s - {} mov. ({})",
            self.player_name,
            self.elapsed_seconds,
            self.move_count,
            self.completed_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Persists the bounded best-times table through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct RankingStore<S> {
    store: S,
    key: String,
    capacity: usize,
    default_player_name: String,
}

impl<S: KeyValueStore> RankingStore<S> {
    /// Create a store using the configured ranking key and capacity.
    pub fn new(store: S, config: &EngineConfig) -> Self {
        Self {
            store,
            key: config.ranking_key.clone(),
            capacity: config.ranking_capacity,
            default_player_name: config.default_player_name.clone(),
        }
    }

    /// The configured table bound.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load the persisted table, best time first.
    ///
    /// Absent, unreadable, or malformed data all come back as an empty
    /// table; the discard is logged but never fails the caller.
    pub fn load(&self) -> Vec<RankingEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("ranking unavailable, starting empty: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("discarding malformed ranking payload: {err}");
                Vec::new()
            }
        }
    }

    /// Insert an entry, keep the best `capacity` times, persist.
    ///
    /// The sort is stable and ascending by `elapsed_seconds`, so equal times
    /// keep their insertion order. No de-duplication: recording the same run
    /// twice produces two rows. Returns the table as persisted.
    pub fn record(&mut self, entry: RankingEntry) -> Result<Vec<RankingEntry>, Error> {
        let mut entries = self.load();
        entries.push(entry);
        entries.sort_by_key(|entry| entry.elapsed_seconds);
        entries.truncate(self.capacity);

        let payload = super::encode(&entries)?;
        self.store.set(&self.key, &payload)?;
        Ok(entries)
    }

    /// Record a finished run straight from the engine's completion stats.
    ///
    /// Blank player names resolve to the configured default; the timestamp
    /// is taken now.
    pub fn record_completion(
        &mut self,
        player_name: &str,
        stats: CompletionStats,
    ) -> Result<Vec<RankingEntry>, Error> {
        let trimmed = player_name.trim();
        let name = if trimmed.is_empty() {
            self.default_player_name.clone()
        } else {
            trimmed.to_string()
        };
        self.record(RankingEntry::new(
            name,
            stats.elapsed_seconds,
            stats.move_count,
            Utc::now(),
        ))
    }
}
