//! Composition root.
//!
//! Builds the three stores once, wires them to the record store and the
//! demo backends, and hands them out as shared handles. The stores do not
//! know about each other.

use std::sync::Arc;

use uplift_core::config::AppConfig;
use uplift_core::state::SessionStatus;
use uplift_core::storage::KeyValueStore;
use uplift_infrastructure::{KvDeadlineRepository, KvUserRepository};

use crate::backend::{DemoAssistant, DemoAuthBackend};
use crate::chat_store::ChatStore;
use crate::clock::{Clock, SystemClock};
use crate::deadline_store::DeadlineStore;
use crate::session_store::SessionStore;

#[derive(Clone)]
pub struct AppContainer {
    pub session: Arc<SessionStore>,
    pub deadlines: Arc<DeadlineStore>,
    pub chat: Arc<ChatStore>,
}

impl AppContainer {
    /// Creates the stores on top of `records`, using the system clock.
    pub fn new(config: &AppConfig, records: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(config, records, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: &AppConfig,
        records: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = SessionStore::new(
            Arc::new(KvUserRepository::new(records.clone())),
            Arc::new(DemoAuthBackend::new(config.login_delay())),
        );
        let deadlines = DeadlineStore::new(Arc::new(KvDeadlineRepository::new(records)), clock);
        let chat = ChatStore::new(Arc::new(DemoAssistant::new(config.assistant_delay())));

        Self {
            session: Arc::new(session),
            deadlines: Arc::new(deadlines),
            chat: Arc::new(chat),
        }
    }

    /// Restores the session and the deadline list concurrently.
    ///
    /// Deadline restore problems are logged and do not prevent start-up.
    pub async fn initialize(&self) -> SessionStatus {
        let (status, deadlines) = tokio::join!(self.session.initialize(), self.deadlines.initialize());
        if let Err(e) = deadlines {
            tracing::warn!(error = %e, "Deadline list restored with errors");
        }
        tracing::info!(%status, "Application initialized");
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use uplift_core::deadline::demo_deadlines;
    use uplift_core::state::Route;
    use uplift_infrastructure::MemoryKeyValueStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
    }

    fn container(records: MemoryKeyValueStore) -> AppContainer {
        AppContainer::with_clock(
            &AppConfig::instant(),
            Arc::new(records),
            Arc::new(FixedClock(today())),
        )
    }

    #[tokio::test]
    async fn test_fresh_install_starts_signed_out_with_demo_deadlines() {
        let records = MemoryKeyValueStore::new();
        let app = container(records.clone());

        let status = app.initialize().await;

        assert_eq!(status, SessionStatus::Unauthenticated);
        assert_eq!(app.session.resolved_route().await, Route::Login);
        assert_eq!(app.deadlines.deadlines().await, demo_deadlines(today()));
        assert!(records.contains("deadlines").await);
        assert!(!records.contains("user").await);
    }

    #[tokio::test]
    async fn test_stores_share_one_record_store() {
        let records = MemoryKeyValueStore::new();
        let app = container(records.clone());
        app.initialize().await;

        app.session.login("32145678", "secret").await.unwrap();

        let restarted = container(records);
        assert_eq!(restarted.initialize().await, SessionStatus::Authenticated);
        assert_eq!(restarted.chat.messages().await.len(), 1);
    }
}
