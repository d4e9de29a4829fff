//! Local record store abstraction.
//!
//! The device storage the stores persist to: a flat map from string keys to
//! serialized text records, read at startup and rewritten on every mutation.

use async_trait::async_trait;

use crate::error::Result;

/// A string-keyed store of text records.
///
/// Implementations make `set` all-or-nothing: a reader sees either the old
/// or the new value, never a partial write. There are no transactions across
/// keys; concurrent writers to the same key race and the last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the record under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the record under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the record under `key`. Succeeds if it was already absent.
    async fn remove(&self, key: &str) -> Result<()>;
}
