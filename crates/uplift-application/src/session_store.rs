//! Session store: who is signed in.
//!
//! State machine:
//!
//! ```text
//! Loading ──initialize──▶ Authenticated | Unauthenticated
//! Authenticated ◀──login / logout──▶ Unauthenticated
//! ```
//!
//! Every change to the user is written through to the user repository before
//! it becomes visible in memory.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use uplift_core::state::{OperationState, Route, SessionStatus};
use uplift_core::user::{User, UserRepository};
use uplift_core::{Result, UpliftError};

use crate::backend::AuthBackend;

const LOGIN_FAILED: &str = "An error occurred during login";
const LOGOUT_FAILED: &str = "An error occurred during logout";
const UPDATE_FAILED: &str = "Failed to update user profile";

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    operation: OperationState,
}

pub struct SessionStore {
    state: RwLock<SessionState>,
    status: watch::Sender<SessionStatus>,
    repository: Arc<dyn UserRepository>,
    backend: Arc<dyn AuthBackend>,
}

impl SessionStore {
    /// Creates a store in the `Loading` state. Call [`Self::initialize`] to
    /// restore the persisted user.
    pub fn new(repository: Arc<dyn UserRepository>, backend: Arc<dyn AuthBackend>) -> Self {
        let (status, _) = watch::channel(SessionStatus::Loading);
        Self {
            state: RwLock::new(SessionState::default()),
            status,
            repository,
            backend,
        }
    }

    /// Restores a previously persisted user.
    ///
    /// A missing or unreadable record resolves to `Unauthenticated`; the
    /// read error is logged, not returned. Calling this after the store has
    /// left `Loading` does nothing.
    pub async fn initialize(&self) -> SessionStatus {
        let mut state = self.state.write().await;
        if self.status() != SessionStatus::Loading {
            return self.status();
        }

        let restored = match self.repository.load().await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "Error loading user");
                None
            }
        };

        let status = if restored.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        };
        state.user = restored;
        self.status.send_replace(status);

        tracing::info!(%status, "Session restored");
        status
    }

    /// Runs the restore if nothing has called [`Self::initialize`] yet, so an
    /// action never skips the `Loading` transition or the persisted user.
    async fn ensure_restored(&self) {
        if self.is_loading() {
            tracing::debug!("Session action before restore, restoring first");
            self.initialize().await;
        }
    }

    /// Signs in with the demo backend.
    ///
    /// Fails with `InvalidCredentials` when either field is blank. Any
    /// non-blank pair is accepted and yields the demo profile.
    pub async fn login(&self, student_number: &str, password: &str) -> Result<User> {
        self.ensure_restored().await;
        if student_number.trim().is_empty() || password.trim().is_empty() {
            let err = UpliftError::InvalidCredentials;
            self.state.write().await.operation = OperationState::settled::<()>(&Err(err.clone()));
            return Err(err);
        }

        self.state.write().await.operation = OperationState::Pending;

        let result = self.sign_in(student_number, password).await;

        let mut state = self.state.write().await;
        state.operation = OperationState::settled(&result);
        if let Ok(user) = &result {
            state.user = Some(user.clone());
            self.status.send_replace(SessionStatus::Authenticated);
            tracing::info!(student_number = %user.student_number, "User logged in");
        }
        result
    }

    async fn sign_in(&self, student_number: &str, password: &str) -> Result<User> {
        let user = self.backend.login(student_number, password).await?;
        self.repository.save(&user).await.map_err(|e| {
            tracing::error!(error = %e, "Login error");
            e.into_persistence(LOGIN_FAILED)
        })?;
        Ok(user)
    }

    /// Clears the persisted record and the in-memory user.
    ///
    /// If the record cannot be removed the user stays signed in.
    pub async fn logout(&self) -> Result<()> {
        self.ensure_restored().await;
        let mut state = self.state.write().await;
        state.operation = OperationState::Pending;

        let result = self.repository.clear().await.map_err(|e| {
            tracing::error!(error = %e, "Logout error");
            e.into_persistence(LOGOUT_FAILED)
        });

        state.operation = OperationState::settled(&result);
        if result.is_ok() {
            state.user = None;
            self.status.send_replace(SessionStatus::Unauthenticated);
            tracing::info!("User logged out");
        }
        result
    }

    /// Replaces the signed-in user's profile wholesale.
    ///
    /// The in-memory profile only changes once the write has succeeded.
    pub async fn update_user(&self, updated: User) -> Result<()> {
        self.ensure_restored().await;
        let mut state = self.state.write().await;
        if state.user.is_none() {
            return Err(UpliftError::validation("No user is signed in"));
        }

        let result = self.repository.save(&updated).await.map_err(|e| {
            tracing::error!(error = %e, "Update user error");
            e.into_persistence(UPDATE_FAILED)
        });

        state.operation = OperationState::settled(&result);
        if result.is_ok() {
            state.user = Some(updated);
        }
        result
    }

    // ============================================================================
    // Read state
    // ============================================================================

    pub fn status(&self) -> SessionStatus {
        *self.status.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status() == SessionStatus::Loading
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn operation(&self) -> OperationState {
        self.state.read().await.operation.clone()
    }

    /// Where the route guard should send the user right now.
    pub fn route(&self) -> Route {
        Route::for_status(self.status())
    }

    /// Waits until the session has left `Loading`, then returns the route.
    ///
    /// Guards use this instead of [`Self::route`] to avoid redirecting an
    /// already signed-in user to the login screen during startup.
    pub async fn resolved_route(&self) -> Route {
        let mut rx = self.status.subscribe();
        let status = match rx.wait_for(|s| *s != SessionStatus::Loading).await {
            Ok(status) => *status,
            // The sender lives in `self`, so this only happens during teardown.
            Err(_) => self.status(),
        };
        Route::for_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DemoAuthBackend;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use uplift_core::user::{Campus, demo_user};

    // Mock UserRepository for testing
    #[derive(Default)]
    struct MockUserRepository {
        user: Mutex<Option<User>>,
        fail_writes: bool,
        fail_reads: bool,
        loads: Mutex<usize>,
    }

    impl MockUserRepository {
        fn with_user(user: User) -> Self {
            Self {
                user: Mutex::new(Some(user)),
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<User> {
            self.user.lock().unwrap().clone()
        }

        fn loads(&self) -> usize {
            *self.loads.lock().unwrap()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn load(&self) -> Result<Option<User>> {
            *self.loads.lock().unwrap() += 1;
            if self.fail_reads {
                return Err(UpliftError::Serialization {
                    format: "JSON".to_string(),
                    message: "expected value".to_string(),
                });
            }
            Ok(self.stored())
        }

        async fn save(&self, user: &User) -> Result<()> {
            if self.fail_writes {
                return Err(UpliftError::io("disk full"));
            }
            *self.user.lock().unwrap() = Some(user.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            if self.fail_writes {
                return Err(UpliftError::io("read-only file system"));
            }
            *self.user.lock().unwrap() = None;
            Ok(())
        }
    }

    fn store_with(repository: Arc<MockUserRepository>) -> SessionStore {
        SessionStore::new(repository, Arc::new(DemoAuthBackend::new(Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let store = store_with(Arc::new(MockUserRepository::default()));

        assert!(store.is_loading());
        assert_eq!(store.route(), Route::Splash);
    }

    #[tokio::test]
    async fn test_initialize_without_record() {
        let store = store_with(Arc::new(MockUserRepository::default()));

        assert_eq!(store.initialize().await, SessionStatus::Unauthenticated);
        assert!(store.user().await.is_none());
        assert_eq!(store.route(), Route::Login);
    }

    #[tokio::test]
    async fn test_initialize_restores_user() {
        let store = store_with(Arc::new(MockUserRepository::with_user(demo_user())));

        assert_eq!(store.initialize().await, SessionStatus::Authenticated);
        assert_eq!(store.user().await, Some(demo_user()));
    }

    #[tokio::test]
    async fn test_initialize_with_unreadable_record() {
        let repository = Arc::new(MockUserRepository {
            fail_reads: true,
            ..MockUserRepository::default()
        });
        let store = store_with(repository);

        assert_eq!(store.initialize().await, SessionStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let repository = Arc::new(MockUserRepository::default());
        let store = store_with(repository.clone());
        store.initialize().await;
        store.login("32145678", "secret").await.unwrap();

        assert_eq!(store.initialize().await, SessionStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_login_with_any_non_empty_pair() {
        let repository = Arc::new(MockUserRepository::default());
        let store = store_with(repository.clone());
        store.initialize().await;

        for (student_number, password) in [("1", "x"), ("32145678", "p@ss"), (" 9 ", " y ")] {
            let user = store.login(student_number, password).await.unwrap();
            assert_eq!(user, demo_user());
            assert!(store.is_authenticated());
        }
        assert_eq!(repository.stored(), Some(demo_user()));
        assert_eq!(store.operation().await, OperationState::Succeeded);
    }

    #[tokio::test]
    async fn test_login_rejects_blank_fields() {
        let repository = Arc::new(MockUserRepository::default());
        let store = store_with(repository.clone());
        store.initialize().await;

        for (student_number, password) in [("", "secret"), ("32145678", "   "), ("", "")] {
            let err = store.login(student_number, password).await.unwrap_err();
            assert!(err.is_invalid_credentials());
        }
        assert!(!store.is_authenticated());
        assert!(repository.stored().is_none());
        assert_eq!(
            store.operation().await,
            OperationState::Failed {
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_login_write_failure_keeps_user_signed_out() {
        let repository = Arc::new(MockUserRepository {
            fail_writes: true,
            ..MockUserRepository::default()
        });
        let store = store_with(repository);
        store.initialize().await;

        let err = store.login("32145678", "secret").await.unwrap_err();

        assert_eq!(err.to_string(), LOGIN_FAILED);
        assert!(!store.is_authenticated());
        assert!(store.user().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_record_and_state() {
        let repository = Arc::new(MockUserRepository::with_user(demo_user()));
        let store = store_with(repository.clone());
        store.initialize().await;

        store.logout().await.unwrap();

        assert!(!store.is_authenticated());
        assert!(store.user().await.is_none());
        assert!(repository.stored().is_none());
        assert_eq!(store.route(), Route::Login);
    }

    #[tokio::test]
    async fn test_logout_write_failure_keeps_user_signed_in() {
        let repository = Arc::new(MockUserRepository {
            user: Mutex::new(Some(demo_user())),
            fail_writes: true,
            ..MockUserRepository::default()
        });
        let store = store_with(repository.clone());
        store.initialize().await;

        let err = store.logout().await.unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(err.to_string(), LOGOUT_FAILED);
        assert!(store.is_authenticated());
        assert_eq!(store.user().await, Some(demo_user()));
        assert_eq!(repository.stored(), Some(demo_user()));
        assert!(matches!(
            store.operation().await,
            OperationState::Failed { .. }
        ));
    }

    #[tokio::test]
    async fn test_login_before_initialize_restores_first() {
        let persisted = User {
            campus: Campus::Mahikeng,
            ..demo_user()
        };
        let repository = Arc::new(MockUserRepository::with_user(persisted));
        let store = store_with(repository.clone());

        store.login("32145678", "secret").await.unwrap();

        assert_eq!(repository.loads(), 1);
        assert!(store.is_authenticated());
        assert_eq!(store.initialize().await, SessionStatus::Authenticated);
        assert_eq!(repository.loads(), 1);
    }

    #[tokio::test]
    async fn test_logout_before_initialize_restores_first() {
        let repository = Arc::new(MockUserRepository {
            user: Mutex::new(Some(demo_user())),
            fail_writes: true,
            ..MockUserRepository::default()
        });
        let store = store_with(repository.clone());

        assert!(store.logout().await.is_err());

        // The persisted user was restored, so the failed logout leaves them
        // signed in instead of stuck in Loading.
        assert_eq!(repository.loads(), 1);
        assert!(store.is_authenticated());
        assert_eq!(store.user().await, Some(demo_user()));
    }

    #[tokio::test]
    async fn test_update_user_before_initialize_uses_restored_user() {
        let repository = Arc::new(MockUserRepository::with_user(demo_user()));
        let store = store_with(repository.clone());

        let updated = User {
            year_of_study: 4,
            ..demo_user()
        };
        store.update_user(updated.clone()).await.unwrap();

        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert_eq!(repository.stored(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_user_replaces_profile() {
        let repository = Arc::new(MockUserRepository::with_user(demo_user()));
        let store = store_with(repository.clone());
        store.initialize().await;

        let updated = User {
            campus: Campus::Vanderbijlpark,
            year_of_study: 4,
            ..demo_user()
        };
        store.update_user(updated.clone()).await.unwrap();

        assert_eq!(store.user().await, Some(updated.clone()));
        assert_eq!(repository.stored(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_user_write_failure_keeps_previous_profile() {
        let repository = Arc::new(MockUserRepository {
            user: Mutex::new(Some(demo_user())),
            fail_writes: true,
            ..MockUserRepository::default()
        });
        let store = store_with(repository);
        store.initialize().await;

        let updated = User {
            name: "Thabo M.".to_string(),
            ..demo_user()
        };
        let err = store.update_user(updated).await.unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(err.to_string(), UPDATE_FAILED);
        assert_eq!(store.user().await, Some(demo_user()));
    }

    #[tokio::test]
    async fn test_update_user_requires_session() {
        let store = store_with(Arc::new(MockUserRepository::default()));
        store.initialize().await;

        let err = store.update_user(demo_user()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_resolved_route_waits_for_restore() {
        let store = Arc::new(store_with(Arc::new(MockUserRepository::with_user(
            demo_user(),
        ))));

        let guard = {
            let store = store.clone();
            tokio::spawn(async move { store.resolved_route().await })
        };
        store.initialize().await;

        assert_eq!(guard.await.unwrap(), Route::Home);
    }
}
