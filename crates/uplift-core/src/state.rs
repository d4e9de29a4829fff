//! Observable state values shared by the stores and the presentation layer.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::Result;

/// Authentication state of the session store.
///
/// `Loading` is distinct from both other states: while the persisted user is
/// being restored, guards must neither show the login screen nor the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Progress of the most recent asynchronous store action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed { message: String },
}

impl OperationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Final state for an action that produced `result`.
    pub fn settled<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }
}

/// Top-level screen the route guard sends the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Route {
    /// Session restore still in flight; render nothing and do not redirect.
    Splash,
    Login,
    Home,
}

impl Route {
    pub fn for_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Loading => Route::Splash,
            SessionStatus::Authenticated => Route::Home,
            SessionStatus::Unauthenticated => Route::Login,
        }
    }
}

/// Success flag plus a human-readable message, as surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

impl<T> From<&Result<T>> for ActionOutcome {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}
