use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use uplift_application::AppContainer;
use uplift_core::config::AppConfig;
use uplift_core::state::Route;
use uplift_core::storage::KeyValueStore;
use uplift_infrastructure::{ConfigService, FileKeyValueStore, MemoryKeyValueStore, UpliftPaths};

mod command;
mod helper;
mod render;
mod shell;

use helper::ShellHelper;
use shell::{Flow, Shell};

#[derive(Parser)]
#[command(name = "uplift")]
#[command(about = "UpliftED - NWU student support in the terminal", long_about = None)]
struct Cli {
    /// Keep config, logs and records under this directory.
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Keep records in memory only; nothing survives exit.
    #[arg(long)]
    ephemeral: bool,
}

/// Sends tracing output to a daily rolling file so it does not interleave
/// with the prompt. The returned guard must outlive the REPL.
fn init_logging(paths: &UpliftPaths, config: &AppConfig) -> Result<WorkerGuard> {
    let logs_dir = paths.logs_dir()?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "uplift.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = UpliftPaths::new(cli.base_dir.as_deref());
    let config_service = ConfigService::new(paths.clone());
    let config = config_service.load_or_init()?;
    let _log_guard = init_logging(&paths, &config)?;

    let records: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryKeyValueStore::new())
    } else {
        let dir = config_service.storage_dir(&config)?;
        tracing::info!(dir = %dir.display(), "Using file storage");
        Arc::new(FileKeyValueStore::new(dir))
    };

    let app = AppContainer::new(&config, records);
    let init = {
        let app = app.clone();
        tokio::spawn(async move { app.initialize().await })
    };

    println!("{}", "=== UpliftED ===".bright_magenta().bold());
    let route = app.session.resolved_route().await;
    init.await?;

    let shell = Shell::new(app);
    match route {
        Route::Home => shell.home().await,
        _ => println!(
            "{}",
            "Sign in with /login <student number> <password>. Type /help for commands.".bright_black()
        ),
    }
    println!();

    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if shell.execute(trimmed).await == Flow::Exit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
