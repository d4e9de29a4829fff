//! File-backed key-value store.

use std::path::PathBuf;

use async_trait::async_trait;
use uplift_core::storage::KeyValueStore;
use uplift_core::{Result, UpliftError};

use super::atomic_file::AtomicTextFile;

/// Keeps each record in `<dir>/<key>.json`.
///
/// File operations run on the blocking pool so callers on the async runtime
/// are not stalled by fsync.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, key: &str) -> Result<AtomicTextFile> {
        validate_key(key)?;
        Ok(AtomicTextFile::new(self.dir.join(format!("{key}.json"))))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(UpliftError::validation(format!("Invalid storage key: '{key}'")))
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| UpliftError::io(format!("Failed to join storage task: {}", e)))?
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        run_blocking(move || file.load().map_err(UpliftError::from)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        let value = value.to_string();
        run_blocking(move || file.save(&value).map_err(UpliftError::from)).await?;
        tracing::debug!(key, dir = %self.dir.display(), "Record written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        run_blocking(move || file.remove().map_err(UpliftError::from)).await?;
        tracing::debug!(key, "Record removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert!(store.get("user").await.unwrap().is_none());

        store.set("user", "{\"id\":\"user1\"}").await.unwrap();
        assert_eq!(
            store.get("user").await.unwrap().as_deref(),
            Some("{\"id\":\"user1\"}")
        );
        assert!(temp_dir.path().join("user.json").exists());

        store.remove("user").await.unwrap();
        assert!(store.get("user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        FileKeyValueStore::new(temp_dir.path())
            .set("deadlines", "[]")
            .await
            .unwrap();

        let reopened = FileKeyValueStore::new(temp_dir.path());
        assert_eq!(reopened.get("deadlines").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        let err = store.set("../escape", "x").await.unwrap_err();
        assert!(err.is_validation());
        assert!(store.get("").await.unwrap_err().is_validation());
    }
}
