//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: The authenticated student's profile
//! - `repository`: Persistence contract for the signed-in user record
//! - `demo`: The fixed profile handed out by the demo login
//!
//! # Usage
//!
//! ```ignore
//! use uplift_core::user::{User, Campus, UserRepository};
//! ```

mod demo;
mod model;
mod repository;

// Re-export public API
pub use demo::demo_user;
pub use model::{Campus, User};
pub use repository::{USER_RECORD_KEY, UserRepository};
