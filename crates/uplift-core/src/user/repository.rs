//! User repository trait.

use async_trait::async_trait;

use super::model::User;
use crate::error::Result;

/// Storage key of the signed-in user record.
pub const USER_RECORD_KEY: &str = "user";

/// Repository for the single persisted user record.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Loads the persisted user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: a user was signed in when the app last ran
    /// - `Ok(None)`: no record stored
    /// - `Err(_)`: the record could not be read or parsed
    async fn load(&self) -> Result<Option<User>>;

    /// Replaces the persisted user.
    async fn save(&self, user: &User) -> Result<()>;

    /// Removes the persisted user. Succeeds if nothing was stored.
    async fn clear(&self) -> Result<()>;
}
