//! Drives the stores from parsed commands.

use colored::Colorize;
use uplift_application::{AppContainer, HOME_PREVIEW_LIMIT};
use uplift_core::state::{ActionOutcome, Route};
use uplift_core::user::User;

use crate::command::Command;
use crate::render;

/// What the REPL loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    app: AppContainer,
}

impl Shell {
    pub fn new(app: AppContainer) -> Self {
        Self { app }
    }

    /// Runs one input line.
    pub async fn execute(&self, line: &str) -> Flow {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                render::error(e);
                return Flow::Continue;
            }
        };

        if command.needs_session() && self.app.session.route() != Route::Home {
            render::info("Please sign in first: /login <student number> <password>");
            return Flow::Continue;
        }

        match command {
            Command::Quit => return Flow::Exit,
            Command::Help => render::help(),
            Command::Login(form) => self.login(form).await,
            Command::Logout => {
                let result = self.app.session.logout().await;
                render::outcome(&ActionOutcome::from(&result), "Signed out.");
            }
            Command::Profile => {
                if let Some(user) = self.app.session.user().await {
                    render::profile(&user);
                }
            }
            Command::Campus(campus) => {
                self.update_profile(|user| user.campus = campus).await;
            }
            Command::Year(year) => {
                self.update_profile(|user| user.year_of_study = year).await;
            }
            Command::Home => self.home().await,
            Command::Deadlines(category) => {
                let list = match category {
                    Some(category) => self.app.deadlines.deadlines_by_category(category).await,
                    None => self.app.deadlines.deadlines().await,
                };
                render::deadlines(&list, self.app.deadlines.today(), "No deadlines.");
            }
            Command::Upcoming => {
                let list = self.app.deadlines.get_upcoming_deadlines().await;
                render::deadlines(&list, self.app.deadlines.today(), "No upcoming deadlines.");
            }
            Command::Add(form) => match form.into_new_deadline() {
                Ok(fields) => match self.app.deadlines.add_deadline(fields).await {
                    Ok(created) => render::deadline(&created, self.app.deadlines.today()),
                    Err(e) => render::error(e),
                },
                Err(e) => render::error(e),
            },
            Command::Toggle(id) => {
                let result = self.app.deadlines.toggle_deadline_completion(&id).await;
                render::outcome(&ActionOutcome::from(&result), "Deadline updated.");
            }
            Command::Remove(id) => {
                let result = self.app.deadlines.remove_deadline(&id).await;
                render::outcome(&ActionOutcome::from(&result), "Deadline removed.");
            }
            Command::Ask(text) => {
                if !text.trim().is_empty() {
                    render::info("Assistant is typing...");
                }
                if let Some(reply) = self.app.chat.send_message(&text).await {
                    render::message(&reply);
                }
            }
            Command::Chat => {
                for message in self.app.chat.messages().await {
                    render::message(&message);
                }
            }
            Command::Clear => {
                self.app.chat.clear_messages().await;
                render::info("Conversation cleared.");
            }
        }
        Flow::Continue
    }

    async fn login(&self, form: uplift_application::LoginForm) {
        if let Err(e) = form.validate() {
            render::error(e);
            return;
        }

        render::info("Signing in...");
        match self
            .app
            .session
            .login(&form.student_number, &form.password)
            .await
        {
            Ok(_) => self.home().await,
            Err(e) => render::error(e),
        }
    }

    async fn update_profile(&self, edit: impl FnOnce(&mut User)) {
        let Some(mut user) = self.app.session.user().await else {
            return;
        };
        edit(&mut user);
        let result = self.app.session.update_user(user).await;
        render::outcome(&ActionOutcome::from(&result), "Profile updated.");
    }

    /// Greeting plus the first few upcoming deadlines.
    pub async fn home(&self) {
        if let Some(user) = self.app.session.user().await {
            println!(
                "{}",
                format!("Welcome back, {}!", user.first_name()).bright_green().bold()
            );
        }
        let preview = self.app.deadlines.upcoming_preview(HOME_PREVIEW_LIMIT).await;
        println!("{}", "Upcoming deadlines".bold());
        render::deadlines(&preview, self.app.deadlines.today(), "Nothing due. Enjoy the break.");
    }
}
