//! Deadline repository trait.

use async_trait::async_trait;

use super::model::Deadline;
use crate::error::Result;

/// Storage key of the deadline list record.
pub const DEADLINES_RECORD_KEY: &str = "deadlines";

/// Repository for the persisted deadline list.
///
/// The list is always read and written as a whole.
#[async_trait]
pub trait DeadlineRepository: Send + Sync {
    /// Loads the persisted list.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(list))`: a list was stored (possibly empty)
    /// - `Ok(None)`: first run, nothing stored yet
    /// - `Err(_)`: the record could not be read or parsed
    async fn load_all(&self) -> Result<Option<Vec<Deadline>>>;

    /// Replaces the persisted list.
    async fn save_all(&self, deadlines: &[Deadline]) -> Result<()>;
}
