//! Input checks run by the presentation layer before calling a store.

use chrono::NaiveDate;
use uplift_core::deadline::{DeadlineCategory, NewDeadline};
use uplift_core::{Result, UpliftError};

/// Login form contents.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub student_number: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(student_number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            student_number: student_number.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.student_number.trim().is_empty() {
            return Err(UpliftError::validation("Student number is required"));
        }
        if self.password.trim().is_empty() {
            return Err(UpliftError::validation("Password is required"));
        }
        Ok(())
    }
}

/// Add-deadline form contents.
#[derive(Debug, Clone)]
pub struct DeadlineForm {
    pub title: String,
    pub date: NaiveDate,
    pub category: DeadlineCategory,
    pub description: String,
}

impl DeadlineForm {
    /// Checks the form and trims it into the fields the store accepts.
    pub fn into_new_deadline(self) -> Result<NewDeadline> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UpliftError::validation("Title is required"));
        }
        Ok(NewDeadline {
            title: title.to_string(),
            date: self.date,
            category: self.category,
            description: self.description.trim().to_string(),
        })
    }
}
