//! DeadlineRepository backed by a key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use uplift_core::Result;
use uplift_core::deadline::{DEADLINES_RECORD_KEY, Deadline, DeadlineRepository};
use uplift_core::storage::KeyValueStore;

/// Stores the whole deadline list as one JSON array under the `deadlines` key.
#[derive(Clone)]
pub struct KvDeadlineRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvDeadlineRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeadlineRepository for KvDeadlineRepository {
    async fn load_all(&self) -> Result<Option<Vec<Deadline>>> {
        match self.store.get(DEADLINES_RECORD_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save_all(&self, deadlines: &[Deadline]) -> Result<()> {
        let json = serde_json::to_string(deadlines)?;
        self.store.set(DEADLINES_RECORD_KEY, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileKeyValueStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use uplift_core::deadline::demo_deadlines;

    #[tokio::test]
    async fn test_first_run_has_no_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = KvDeadlineRepository::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));

        assert!(repo.load_all().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_reload_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
        let list = demo_deadlines(today);

        KvDeadlineRepository::new(Arc::new(FileKeyValueStore::new(temp_dir.path())))
            .save_all(&list)
            .await
            .unwrap();

        let reopened = KvDeadlineRepository::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));
        assert_eq!(reopened.load_all().await.unwrap(), Some(list));
    }

    #[tokio::test]
    async fn test_empty_list_is_distinct_from_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = KvDeadlineRepository::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));

        repo.save_all(&[]).await.unwrap();

        assert_eq!(repo.load_all().await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_reads_mobile_client_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        store
            .set(
                DEADLINES_RECORD_KEY,
                r#"[{"id":"deadline1","title":"Fees","date":"2025-09-01","type":"Financial","description":"Pay fees","isCompleted":true}]"#,
            )
            .await
            .unwrap();

        let list = KvDeadlineRepository::new(Arc::new(store))
            .load_all()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0].is_completed);
    }
}
