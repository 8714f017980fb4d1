//! Engine configuration.
//!
//! The grid itself is fixed at 3x3; what varies per embedding is the ranking
//! policy and where the stores keep their data. Hosts configure these at
//! startup rather than patching constants.

use serde::{Deserialize, Serialize};

/// Configuration shared by the engine and the stores.
///
/// ## Defaults
///
/// - `ranking_capacity`: 5
/// - `default_player_name`: `"Anónimo"`
/// - `ranking_key`: `"best_times"`
/// - `session_key`: `"saved_game"`
///
/// ```
/// use eight_puzzle::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_ranking_capacity(10)
///     .with_default_player_name("Guest");
///
/// assert_eq!(config.ranking_capacity, 10);
/// assert_eq!(config.default_player_name, "Guest");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of ranking entries kept after each record.
    pub ranking_capacity: usize,

    /// Name substituted when a player leaves the name field blank.
    pub default_player_name: String,

    /// Key the ranking table is stored under.
    pub ranking_key: String,

    /// Key the single session slot is stored under.
    pub session_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ranking_capacity: 5,
            default_player_name: "Anónimo".to_string(),
            ranking_key: "best_times".to_string(),
            session_key: "saved_game".to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the ranking capacity.
    #[must_use]
    pub fn with_ranking_capacity(mut self, capacity: usize) -> Self {
        self.ranking_capacity = capacity;
        self
    }

    /// Set the fallback player name.
    #[must_use]
    pub fn with_default_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = name.into();
        self
    }

    /// Set the ranking storage key.
    #[must_use]
    pub fn with_ranking_key(mut self, key: impl Into<String>) -> Self {
        self.ranking_key = key.into();
        self
    }

    /// Set the session storage key.
    #[must_use]
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    /// Resolve a player name against the configured fallback.
    ///
    /// Whitespace-only input counts as blank, matching how the name field is
    /// trimmed before use everywhere else.
    #[must_use]
    pub fn resolve_player_name(&self, name: &str) -> String {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.default_player_name.clone()
        } else {
            trimmed.to_string()
        }
    }
}
