//! REPL command parsing.

use std::str::FromStr;

use chrono::NaiveDate;
use uplift_application::{DeadlineForm, LoginForm};
use uplift_core::deadline::DeadlineCategory;
use uplift_core::user::Campus;
use uplift_core::{Result, UpliftError};

/// A slash command as shown in help, completion and hints.
pub struct CommandInfo {
    pub name: &'static str,
    /// Argument synopsis, empty for commands without arguments.
    pub args: &'static str,
    pub about: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo { name: "/login", args: "<student number> <password>", about: "Sign in" },
    CommandInfo { name: "/logout", args: "", about: "Sign out" },
    CommandInfo { name: "/home", args: "", about: "Greeting and the next deadlines" },
    CommandInfo { name: "/profile", args: "", about: "Show your profile" },
    CommandInfo { name: "/campus", args: "<name>", about: "Change campus" },
    CommandInfo { name: "/year", args: "<n>", about: "Change year of study" },
    CommandInfo { name: "/deadlines", args: "[category]", about: "All deadlines, optionally one category" },
    CommandInfo { name: "/upcoming", args: "", about: "Open deadlines from today on" },
    CommandInfo {
        name: "/add",
        args: "<YYYY-MM-DD> <category> <title> [| description]",
        about: "Add a deadline",
    },
    CommandInfo { name: "/toggle", args: "<id>", about: "Mark a deadline done or not done" },
    CommandInfo { name: "/remove", args: "<id>", about: "Delete a deadline" },
    CommandInfo { name: "/ask", args: "<question>", about: "Ask the academic assistant (or just type)" },
    CommandInfo { name: "/chat", args: "", about: "Show the conversation" },
    CommandInfo { name: "/clear", args: "", about: "Start a new conversation" },
    CommandInfo { name: "/help", args: "", about: "List commands" },
];

pub fn find_command(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|c| c.name == name)
}

#[derive(Debug, Clone)]
pub enum Command {
    Login(LoginForm),
    Logout,
    Profile,
    Campus(Campus),
    Year(u8),
    Home,
    Deadlines(Option<DeadlineCategory>),
    Upcoming,
    Add(DeadlineForm),
    Toggle(String),
    Remove(String),
    /// Plain text or `/ask <question>`.
    Ask(String),
    Chat,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Requires a signed-in session.
    pub fn needs_session(&self) -> bool {
        !matches!(self, Self::Login(_) | Self::Help | Self::Quit)
    }

    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line == "quit" || line == "exit" {
            return Ok(Self::Quit);
        }
        if !line.starts_with('/') {
            return Ok(Self::Ask(line.to_string()));
        }

        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match name {
            "/login" => {
                let mut parts = rest.split_whitespace();
                let student_number = parts.next().unwrap_or_default();
                let password = parts.next().unwrap_or_default();
                Ok(Self::Login(LoginForm::new(student_number, password)))
            }
            "/logout" => Ok(Self::Logout),
            "/profile" => Ok(Self::Profile),
            "/campus" => Campus::from_str(rest)
                .map(Self::Campus)
                .map_err(|_| UpliftError::validation(format!("Unknown campus: '{rest}'"))),
            "/year" => rest
                .parse::<u8>()
                .ok()
                .filter(|year| (1..=7).contains(year))
                .map(Self::Year)
                .ok_or_else(|| UpliftError::validation("Year of study must be between 1 and 7")),
            "/home" => Ok(Self::Home),
            "/deadlines" if rest.is_empty() => Ok(Self::Deadlines(None)),
            "/deadlines" => parse_category(rest).map(|c| Self::Deadlines(Some(c))),
            "/upcoming" => Ok(Self::Upcoming),
            "/add" => parse_add(rest).map(Self::Add),
            "/toggle" => required_id(rest).map(Self::Toggle),
            "/remove" => required_id(rest).map(Self::Remove),
            "/ask" => Ok(Self::Ask(rest.to_string())),
            "/chat" => Ok(Self::Chat),
            "/clear" => Ok(Self::Clear),
            "/help" => Ok(Self::Help),
            other => Err(UpliftError::validation(format!("Unknown command: {other}"))),
        }
    }
}

fn parse_category(value: &str) -> Result<DeadlineCategory> {
    DeadlineCategory::from_str(value)
        .map_err(|_| UpliftError::validation(format!("Unknown category: '{value}'")))
}

fn required_id(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(UpliftError::validation("Deadline id is required"));
    }
    Ok(value.to_string())
}

/// `/add <YYYY-MM-DD> <category> <title> [| description]`
fn parse_add(rest: &str) -> Result<DeadlineForm> {
    let usage = || UpliftError::validation("Usage: /add <YYYY-MM-DD> <category> <title> [| description]");

    let mut parts = rest.splitn(3, ' ');
    let date = parts.next().filter(|s| !s.is_empty()).ok_or_else(usage)?;
    let category = parts.next().ok_or_else(usage)?;
    let text = parts.next().unwrap_or_default();

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| UpliftError::validation(format!("Invalid date: '{date}'")))?;
    let (title, description) = text.split_once('|').unwrap_or((text, ""));

    Ok(DeadlineForm {
        title: title.to_string(),
        date,
        category: parse_category(category)?,
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_question() {
        match Command::parse("when is registration?").unwrap() {
            Command::Ask(text) => assert_eq!(text, "when is registration?"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_login_with_missing_password_fails_validation() {
        let Command::Login(form) = Command::parse("/login 32145678").unwrap() else {
            panic!("expected login");
        };
        assert_eq!(form.validate().unwrap_err().to_string(), "Password is required");
    }

    #[test]
    fn test_add_with_description() {
        let Command::Add(form) =
            Command::parse("/add 2025-09-01 financial Residence fees | Pay at the cashier").unwrap()
        else {
            panic!("expected add");
        };

        let fields = form.into_new_deadline().unwrap();
        assert_eq!(fields.title, "Residence fees");
        assert_eq!(fields.description, "Pay at the cashier");
        assert_eq!(fields.category, DeadlineCategory::Financial);
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let err = Command::parse("/add 01-09-2025 academic Essay").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_campus_is_case_insensitive() {
        assert!(matches!(
            Command::parse("/campus mahikeng").unwrap(),
            Command::Campus(Campus::Mahikeng)
        ));
        assert!(Command::parse("/campus Durban").is_err());
    }

    #[test]
    fn test_deadlines_filter() {
        assert!(matches!(
            Command::parse("/deadlines").unwrap(),
            Command::Deadlines(None)
        ));
        assert!(matches!(
            Command::parse("/deadlines event").unwrap(),
            Command::Deadlines(Some(DeadlineCategory::Event))
        ));
    }

    #[test]
    fn test_every_listed_command_parses() {
        for info in COMMANDS.iter().filter(|c| c.args.is_empty()) {
            assert!(Command::parse(info.name).is_ok(), "{} failed to parse", info.name);
        }
    }

    #[test]
    fn test_session_requirement() {
        assert!(!Command::parse("/help").unwrap().needs_session());
        assert!(!Command::parse("quit").unwrap().needs_session());
        assert!(Command::parse("/upcoming").unwrap().needs_session());
    }
}
