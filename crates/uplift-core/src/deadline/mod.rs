//! Deadline domain module.
//!
//! # Module Structure
//!
//! - `model`: Deadline entity, category and countdown helpers
//! - `query`: Pure list queries (upcoming, by category)
//! - `id`: Timestamp-based identifier generation
//! - `repository`: Persistence contract for the deadline list
//! - `demo`: First-run seed data

mod demo;
mod id;
mod model;
mod query;
mod repository;

pub use demo::demo_deadlines;
pub use id::DeadlineIdGenerator;
pub use model::{Deadline, DeadlineCategory, DeadlineStatus, NewDeadline, URGENT_WINDOW_DAYS};
pub use query::{by_category, upcoming};
pub use repository::{DEADLINES_RECORD_KEY, DeadlineRepository};
