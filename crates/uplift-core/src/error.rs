//! Error types for the UpliftED application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire application.
///
/// Store actions return this through [`Result`]; the presentation layer turns
/// it into a human-readable message via [`crate::state::ActionOutcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpliftError {
    /// A required field was empty. Raised by callers before reaching a store.
    #[error("{0}")]
    Validation(String),

    /// Login was attempted with missing credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The local record store could not be read or written.
    ///
    /// `message` is what the user sees, `cause` is what gets logged.
    #[error("{message}")]
    Persistence { message: String, cause: String },

    /// The simulated backend call failed.
    #[error("Simulated failure: {0}")]
    SimulatedFailure(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UpliftError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Persistence error with a user-facing message and the underlying cause.
    pub fn persistence(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Persistence {
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Re-labels any storage-level failure as a `Persistence` error carrying
    /// `message`. Errors that are already user-facing pass through.
    pub fn into_persistence(self, message: &str) -> Self {
        match self {
            Self::Persistence { cause, .. } => Self::Persistence {
                message: message.to_string(),
                cause,
            },
            Self::Io { .. } | Self::Serialization { .. } => Self::persistence(message, self),
            other => other,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for UpliftError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for UpliftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for UpliftError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for UpliftError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, UpliftError>`.
pub type Result<T> = std::result::Result<T, UpliftError>;
