//! Pure queries over a deadline list. Nothing here mutates or persists.

use chrono::NaiveDate;

use super::model::{Deadline, DeadlineCategory};

/// Open deadlines dated `today` or later, earliest first.
///
/// The sort is stable, so deadlines sharing a date keep their list order.
pub fn upcoming(deadlines: &[Deadline], today: NaiveDate) -> Vec<Deadline> {
    let mut result: Vec<Deadline> = deadlines
        .iter()
        .filter(|d| d.is_upcoming(today))
        .cloned()
        .collect();
    result.sort_by_key(|d| d.date);
    result
}

pub fn by_category(deadlines: &[Deadline], category: DeadlineCategory) -> Vec<Deadline> {
    deadlines
        .iter()
        .filter(|d| d.category == category)
        .cloned()
        .collect()
}
