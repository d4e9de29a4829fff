//! Deadline domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Deadlines due within this many days are flagged as urgent.
pub const URGENT_WINDOW_DAYS: i64 = 14;

/// What kind of obligation a deadline represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum DeadlineCategory {
    Academic,
    Financial,
    Administrative,
    Event,
}

/// A calendar deadline owned by the deadline store.
///
/// The category is stored under `type`, matching the record layout of the
/// mobile client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub category: DeadlineCategory,
    pub description: String,
    pub is_completed: bool,
}

/// Fields supplied by the caller when adding a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeadline {
    pub title: String,
    pub date: NaiveDate,
    pub category: DeadlineCategory,
    pub description: String,
}

/// Where a deadline stands relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeadlineStatus {
    Completed,
    Overdue,
    #[strum(serialize = "Today")]
    DueToday,
    Upcoming,
}

impl Deadline {
    /// Builds an open deadline from caller-supplied fields.
    pub fn new(id: String, fields: NewDeadline) -> Self {
        Self {
            id,
            title: fields.title,
            date: fields.date,
            category: fields.category,
            description: fields.description,
            is_completed: false,
        }
    }

    /// Whole days from `today` until the deadline. Negative when overdue.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    pub fn status_on(&self, today: NaiveDate) -> DeadlineStatus {
        if self.is_completed {
            return DeadlineStatus::Completed;
        }
        match self.days_until(today) {
            d if d < 0 => DeadlineStatus::Overdue,
            0 => DeadlineStatus::DueToday,
            _ => DeadlineStatus::Upcoming,
        }
    }

    /// An open deadline falling on `today` or later.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.date >= today
    }

    /// An open deadline due after today and within [`URGENT_WINDOW_DAYS`].
    ///
    /// A deadline due today is reported as [`DeadlineStatus::DueToday`]
    /// instead.
    pub fn is_urgent(&self, today: NaiveDate) -> bool {
        !self.is_completed && (1..=URGENT_WINDOW_DAYS).contains(&self.days_until(today))
    }

    /// Returns a copy with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}
