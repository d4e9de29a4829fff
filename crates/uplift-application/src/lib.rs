//! Application layer for UpliftED.
//!
//! The session, deadline and chat stores, the simulated backend they call,
//! and the container that wires them together.

pub mod backend;
pub mod chat_store;
pub mod clock;
pub mod container;
pub mod deadline_store;
pub mod forms;
pub mod session_store;

pub use backend::{AssistantBackend, AuthBackend, DemoAssistant, DemoAuthBackend};
pub use chat_store::ChatStore;
pub use clock::{Clock, FixedClock, SystemClock};
pub use container::AppContainer;
pub use deadline_store::{DeadlineStore, HOME_PREVIEW_LIMIT};
pub use forms::{DeadlineForm, LoginForm};
pub use session_store::SessionStore;
