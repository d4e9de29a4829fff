//! User domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// University campus a student is registered at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Campus {
    Potchefstroom,
    Vanderbijlpark,
    Mahikeng,
}

/// The signed-in student's profile.
///
/// Owned exclusively by the session store; every update replaces the whole
/// record. Field names serialize in camelCase so records written by the
/// mobile client load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub student_number: String,
    pub faculty: String,
    pub year_of_study: u8,
    pub campus: Campus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl User {
    /// Returns the first name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
