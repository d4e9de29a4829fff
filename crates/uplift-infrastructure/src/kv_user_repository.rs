//! UserRepository backed by a key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use uplift_core::Result;
use uplift_core::storage::KeyValueStore;
use uplift_core::user::{USER_RECORD_KEY, User, UserRepository};

/// Stores the signed-in user as JSON under the `user` key.
#[derive(Clone)]
pub struct KvUserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvUserRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn load(&self) -> Result<Option<User>> {
        match self.store.get(USER_RECORD_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_RECORD_KEY, &json).await
    }

    async fn clear(&self) -> Result<()> {
        self.store.remove(USER_RECORD_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use uplift_core::user::demo_user;

    fn repository() -> (KvUserRepository, MemoryKeyValueStore) {
        let store = MemoryKeyValueStore::new();
        (KvUserRepository::new(Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let (repo, store) = repository();

        assert!(repo.load().await.unwrap().is_none());

        repo.save(&demo_user()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Some(demo_user()));

        repo.clear().await.unwrap();
        assert!(!store.contains(USER_RECORD_KEY).await);
    }

    #[tokio::test]
    async fn test_malformed_record_is_serialization_error() {
        let (repo, store) = repository();
        store.set(USER_RECORD_KEY, "{not json").await.unwrap();

        let err = repo.load().await.unwrap_err();
        assert!(err.is_serialization());
    }
}
