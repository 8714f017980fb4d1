//! Crate error type.
//!
//! Three failure kinds cover everything the engine and stores can report:
//!
//! - [`Error::CorruptSnapshot`]: a stored or supplied snapshot failed
//!   structural validation. Callers must leave their current state untouched.
//! - [`Error::NotFound`]: no session was ever saved.
//! - [`Error::StorageUnavailable`]: the persistence medium rejected a
//!   read or write (quota, permissions, missing directory).
//!
//! Malformed *ranking* data is deliberately not an error: the ranking is
//! best-effort and recovers to an empty list (see `store::ranking`).

use thiserror::Error;

/// Errors surfaced by the engine and the persistence stores.
#[derive(Debug, Error)]
pub enum Error {
    /// Stored or supplied snapshot failed structural validation.
    ///
    /// A valid snapshot holds exactly 9 cells: tiles 1..=8 once each plus a
    /// single empty cell.
    #[error("snapshot failed structural validation")]
    CorruptSnapshot,

    /// No session has ever been saved.
    #[error("no saved session")]
    NotFound,

    /// The persistence medium rejected the operation.
    #[error("storage unavailable")]
    StorageUnavailable(#[from] std::io::Error),
}

impl Error {
    /// Check whether this error means the saved data is structurally bad
    /// (as opposed to missing or unreachable).
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptSnapshot)
    }
}
