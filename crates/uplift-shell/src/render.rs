//! Terminal rendering of store state.

use chrono::NaiveDate;
use colored::Colorize;
use uplift_core::chat::{ChatMessage, Sender};
use uplift_core::deadline::{Deadline, DeadlineStatus};
use uplift_core::state::ActionOutcome;
use uplift_core::user::User;

use crate::command::COMMANDS;

pub fn outcome(outcome: &ActionOutcome, success_message: &str) {
    match (outcome.success, outcome.error.as_deref()) {
        (true, _) => println!("{}", success_message.bright_green()),
        (false, Some(error)) => println!("{}", error.red()),
        (false, None) => println!("{}", "Something went wrong".red()),
    }
}

pub fn error(message: impl std::fmt::Display) {
    println!("{}", message.to_string().red());
}

pub fn info(message: &str) {
    println!("{}", message.bright_black());
}

pub fn profile(user: &User) {
    println!("{}", user.name.bold());
    println!("  Student number: {}", user.student_number);
    println!("  Email:          {}", user.email);
    println!("  Faculty:        {}", user.faculty);
    println!("  Year of study:  {}", user.year_of_study);
    println!("  Campus:         {}", user.campus);
}

/// Human countdown for a deadline: "Today", "in 5 days", "3 days ago".
fn countdown(deadline: &Deadline, today: NaiveDate) -> String {
    match deadline.days_until(today) {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d > 1 => format!("in {d} days"),
        -1 => "1 day ago".to_string(),
        d => format!("{} days ago", -d),
    }
}

pub fn deadline(deadline: &Deadline, today: NaiveDate) {
    let status = deadline.status_on(today);
    let mark = if deadline.is_completed { "[x]" } else { "[ ]" };
    let line = format!(
        "{mark} {:<16} {}  {:<40} {:<15} {}",
        deadline.id,
        deadline.date.format("%Y-%m-%d"),
        deadline.title,
        deadline.category.to_string(),
        countdown(deadline, today),
    );

    let line = match status {
        DeadlineStatus::Completed => line.bright_black(),
        DeadlineStatus::Overdue => line.red(),
        DeadlineStatus::DueToday => line.yellow().bold(),
        _ if deadline.is_urgent(today) => line.yellow(),
        _ => line.normal(),
    };
    println!("{line}");
}

pub fn deadlines(list: &[Deadline], today: NaiveDate, empty_message: &str) {
    if list.is_empty() {
        info(empty_message);
        return;
    }
    for d in list {
        deadline(d, today);
    }
}

pub fn message(message: &ChatMessage) {
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    match message.sender {
        Sender::User => println!("{} {}", time.to_string().bright_black(), message.text.green()),
        Sender::Assistant => {
            println!("{} {}", time.to_string().bright_black(), "Assistant".bright_magenta());
            for line in message.text.lines() {
                println!("  {}", line.bright_blue());
            }
        }
    }
}

pub fn help() {
    for info in COMMANDS {
        let usage = format!("{} {}", info.name, info.args);
        println!("  {:<56} {}", usage.trim_end().bright_cyan(), info.about.bright_black());
    }
    println!("  {:<56} {}", "quit".bright_cyan(), "Exit".bright_black());
}
