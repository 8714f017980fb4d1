//! Persistence: the key-value medium and the two stores built on it.
//!
//! `RankingStore` and `SessionStore` own their persisted payloads
//! independently and share nothing but the [`KeyValueStore`] abstraction;
//! the engine reaches them only through their methods.

pub mod kv;
pub mod ranking;
pub mod session;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use ranking::{RankingEntry, RankingStore};
pub use session::{SessionSnapshot, SessionStore};

use serde::Serialize;

use crate::error::Error;

/// Serialize a record for storage.
///
/// Serialization of these record types cannot realistically fail, but a
/// failure still maps onto the storage error rather than panicking.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|err| {
        Error::StorageUnavailable(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}
