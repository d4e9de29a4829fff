//! Chat domain module.
//!
//! - `model`: Transcript messages
//! - `replies`: Keyword-matched canned replies of the demo assistant

mod model;
mod replies;

pub use model::{ChatMessage, Sender, WELCOME_MESSAGE_ID, WELCOME_TEXT};
pub use replies::{FAILURE_REPLY, ReplyTopic, canned_reply};
