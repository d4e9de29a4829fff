//! Simulated backend calls.
//!
//! Both traits are the seams where a real service would plug in
//! (`POST /login` and `POST /assistant/message`). The demo implementations
//! only wait a fixed delay to emulate network latency.

use std::time::Duration;

use async_trait::async_trait;
use uplift_core::Result;
use uplift_core::chat::canned_reply;
use uplift_core::user::{User, demo_user};

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchanges credentials for the student's profile.
    async fn login(&self, student_number: &str, password: &str) -> Result<User>;
}

#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Produces the assistant's answer to `question`.
    async fn reply(&self, question: &str) -> Result<String>;
}

/// Accepts any credentials and returns the demo profile.
///
/// This is mock behaviour for the offline demo. It performs no credential
/// check at all and must not be reused for real authentication.
#[derive(Debug, Clone)]
pub struct DemoAuthBackend {
    delay: Duration,
}

impl DemoAuthBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthBackend for DemoAuthBackend {
    async fn login(&self, student_number: &str, _password: &str) -> Result<User> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(student_number, "Demo login accepted");
        Ok(demo_user())
    }
}

/// Answers from the canned keyword replies.
#[derive(Debug, Clone)]
pub struct DemoAssistant {
    delay: Duration,
}

impl DemoAssistant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AssistantBackend for DemoAssistant {
    async fn reply(&self, question: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(canned_reply(question))
    }
}
