use chrono::{Duration, NaiveDate};

use super::model::{Deadline, DeadlineCategory};

/// Seed list written on first run.
///
/// Dates are offsets from `today` so a fresh install always shows a mix of
/// overdue, urgent and later deadlines.
pub fn demo_deadlines(today: NaiveDate) -> Vec<Deadline> {
    let seed = [
        (
            "deadline1",
            "Assignment 2: Software Engineering",
            5,
            DeadlineCategory::Academic,
            "Submit the design document for the semester project on eFundi.",
        ),
        (
            "deadline2",
            "NSFAS Appeal Submission",
            12,
            DeadlineCategory::Financial,
            "Final day to submit supporting documents for an NSFAS appeal.",
        ),
        (
            "deadline3",
            "Module Change Deadline",
            -3,
            DeadlineCategory::Administrative,
            "Last day to add or cancel second-semester modules.",
        ),
        (
            "deadline4",
            "Career Fair",
            20,
            DeadlineCategory::Event,
            "Annual career fair in the Potchefstroom campus sports hall.",
        ),
        (
            "deadline5",
            "Semester Test: Mathematics",
            30,
            DeadlineCategory::Academic,
            "Covers chapters 1 to 6. Bring your student card.",
        ),
    ];

    seed.into_iter()
        .map(|(id, title, offset, category, description)| Deadline {
            id: id.to_string(),
            title: title.to_string(),
            date: today + Duration::days(offset),
            category,
            description: description.to_string(),
            is_completed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
        let list = demo_deadlines(today);
        let ids: HashSet<&str> = list.iter().map(|d| d.id.as_str()).collect();

        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_demo_has_one_overdue_entry() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
        let overdue = demo_deadlines(today)
            .iter()
            .filter(|d| d.date < today)
            .count();

        assert_eq!(overdue, 1);
    }
}
