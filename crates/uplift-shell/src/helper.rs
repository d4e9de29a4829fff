//! Line editing support: command and argument completion, usage hints and
//! command highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;
use uplift_core::deadline::DeadlineCategory;
use uplift_core::user::Campus;

use crate::command::{COMMANDS, find_command};

#[derive(Clone, Default)]
pub struct ShellHelper;

/// Values offered for the argument being typed, if it is an enum argument.
fn argument_values(command: &str, arg_index: usize) -> Vec<String> {
    match (command, arg_index) {
        ("/campus", 0) => Campus::iter().map(|c| c.to_string()).collect(),
        ("/deadlines", 0) | ("/add", 1) => {
            DeadlineCategory::iter().map(|c| c.to_string()).collect()
        }
        _ => Vec::new(),
    }
}

fn candidates(line: &str) -> (usize, Vec<String>) {
    let Some((command, args)) = line.split_once(' ') else {
        let names = COMMANDS
            .iter()
            .map(|c| c.name)
            .filter(|name| name.starts_with(line))
            .map(str::to_string)
            .collect();
        return (0, names);
    };

    let arg_index = args.matches(' ').count();
    let word_start = line.rfind(' ').map_or(0, |i| i + 1);
    let partial = line[word_start..].to_lowercase();
    let values = argument_values(command, arg_index)
        .into_iter()
        .filter(|v| v.to_lowercase().starts_with(&partial))
        .collect();
    (word_start, values)
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let (start, values) = candidates(line);
        let pairs = values
            .into_iter()
            .map(|value| Pair {
                display: value.clone(),
                replacement: value,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for ShellHelper {
    /// Known commands in cyan, unknown ones in red; arguments untouched.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        let (command, rest) = match line.find(' ') {
            Some(i) => line.split_at(i),
            None => (line, ""),
        };
        let command = if find_command(command).is_some() {
            command.bright_cyan()
        } else {
            command.red()
        };
        Owned(format!("{command}{rest}"))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    /// Completes a unique command name and then shows its argument synopsis.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return None;
        }

        if let Some(command) = line.strip_suffix(' ').and_then(find_command) {
            return (!command.args.is_empty()).then(|| command.args.to_string());
        }
        if line.contains(' ') {
            return None;
        }

        let mut matches = COMMANDS.iter().filter(|c| c.name.starts_with(line));
        let command = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        let rest = &command.name[line.len()..];
        if command.args.is_empty() {
            (!rest.is_empty()).then(|| rest.to_string())
        } else {
            Some(format!("{rest} {}", command.args))
        }
    }
}

impl Validator for ShellHelper {}
