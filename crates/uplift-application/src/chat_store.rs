//! Chat store: the in-memory transcript with the academic assistant.
//!
//! Nothing here is persisted. A restart starts from the welcome message.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uplift_core::chat::{ChatMessage, FAILURE_REPLY};
use uplift_core::state::OperationState;

use crate::backend::AssistantBackend;

#[derive(Debug)]
struct ChatState {
    messages: Vec<ChatMessage>,
    operation: OperationState,
}

pub struct ChatStore {
    state: RwLock<ChatState>,
    /// One send in flight at a time, so every question is directly followed
    /// by its answer in the transcript.
    gate: Mutex<()>,
    assistant: Arc<dyn AssistantBackend>,
}

impl ChatStore {
    pub fn new(assistant: Arc<dyn AssistantBackend>) -> Self {
        Self {
            state: RwLock::new(ChatState {
                messages: vec![ChatMessage::welcome()],
                operation: OperationState::Idle,
            }),
            gate: Mutex::new(()),
            assistant,
        }
    }

    /// Sends `text` to the assistant and returns the message appended in reply.
    ///
    /// Blank input appends nothing and returns `None`. Otherwise `text` is
    /// recorded and answered as typed. A failed reply appends a generic
    /// apology instead of an answer.
    pub async fn send_message(&self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let _turn = self.gate.lock().await;
        {
            let mut state = self.state.write().await;
            state.messages.push(ChatMessage::from_user(text));
            state.operation = OperationState::Pending;
        }

        let result = self.assistant.reply(text).await;

        let mut state = self.state.write().await;
        state.operation = OperationState::settled(&result);
        let reply = match result {
            Ok(answer) => ChatMessage::from_assistant(answer),
            Err(e) => {
                tracing::error!(error = %e, "Error getting assistant response");
                ChatMessage::failure(FAILURE_REPLY)
            }
        };
        state.messages.push(reply.clone());
        Some(reply)
    }

    /// Resets the transcript to the welcome message.
    pub async fn clear_messages(&self) {
        let _turn = self.gate.lock().await;
        let mut state = self.state.write().await;
        state.messages = vec![ChatMessage::welcome()];
        state.operation = OperationState::Idle;
        tracing::debug!("Chat transcript cleared");
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.read().await.messages.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.operation.is_pending()
    }

    pub async fn operation(&self) -> OperationState {
        self.state.read().await.operation.clone()
    }
}
