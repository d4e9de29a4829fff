//! Chat message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

pub const WELCOME_MESSAGE_ID: &str = "welcome";
pub const WELCOME_TEXT: &str =
    "Hello! I'm your NWU Academic Assistant. How can I help you today?";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in the assistant transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            text: WELCOME_TEXT.to_string(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
        }
    }

    pub fn from_user(text: impl Into<String>) -> Self {
        Self::stamped("user", text.into(), Sender::User)
    }

    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self::stamped("assistant", text.into(), Sender::Assistant)
    }

    /// An assistant-side message reporting that no reply could be produced.
    pub fn failure(text: impl Into<String>) -> Self {
        Self::stamped("error", text.into(), Sender::Assistant)
    }

    fn stamped(prefix: &str, text: String, sender: Sender) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("{prefix}-{}", timestamp.timestamp_millis()),
            text,
            sender,
            timestamp,
        }
    }
}
