//! Domain layer for UpliftED.
//!
//! Models, errors and the persistence contracts shared by the stores. This
//! crate performs no I/O.

pub mod chat;
pub mod config;
pub mod deadline;
pub mod error;
pub mod state;
pub mod storage;
pub mod user;

// Re-export common error type
pub use error::{Result, UpliftError};
