//! Command-line driver for the tasktrack core.
//!
//! Usage:
//!
//! ```text
//! tasktrack --email <EMAIL> --password <PASSWORD> [--data-dir <DIR>] [--config <FILE>] <COMMAND>
//! ```
//!
//! Each invocation logs in once and runs one command as that user:
//!
//! - `list [--format text|json]` shows every task, marking the caller's own
//!   tasks with "you".
//! - `create --code <N> --name <NAME> --assignee <USER>` creates a task.
//! - `change-status --code <N> --status <STATUS>` advances a task by one
//!   step. The status is `0`..`2` or `not_started`, `in_progress`, `done`.
//!
//! Exit status is 0 on success, 1 when the request is rejected (unknown
//! task, user, or credentials, or an invalid transition), and 2 when storage
//! fails. Diagnostics go to stderr; set `TASKTRACK_LOG` (for example
//! `TASKTRACK_LOG=debug`) to see store-level events.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use mockable::DefaultClock;
use tasktrack::app::FlatFileApp;
use tasktrack::config::{ConfigError, StorageConfig};
use tasktrack::storage::StorageError;
use tasktrack::task::domain::{ParseTaskStatusError, TaskCode, TaskStatus};
use tasktrack::task::services::{
    ChangeStatusRequest, CreateTaskRequest, ErrorKind, RenderError, TaskLifecycleError,
    render_task_list,
};
use tasktrack::user::domain::UserCode;
use tasktrack::user::services::LoginError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TASKTRACK_LOG";

/// Flat-file task tracker.
#[derive(Parser, Debug)]
#[command(name = "tasktrack", about = "Track tasks through a fixed lifecycle")]
struct Cli {
    /// Email address to log in with
    #[arg(long)]
    email: String,

    /// Password to log in with
    #[arg(long)]
    password: String,

    /// Directory holding the record files (overrides the config file)
    #[arg(long)]
    data_dir: Option<Utf8PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List all tasks
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Create a new task
    Create {
        /// Task code
        #[arg(long)]
        code: u32,

        /// Task name (at most 10 characters)
        #[arg(long)]
        name: String,

        /// Code of the user responsible for the task
        #[arg(long)]
        assignee: u32,
    },

    /// Advance a task to its next status
    #[command(name = "change-status")]
    ChangeStatus {
        /// Task code
        #[arg(long)]
        code: u32,

        /// Requested status
        #[arg(long, value_parser = parse_status)]
        status: TaskStatus,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("task storage is unavailable")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to encode output")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Login(LoginError::InvalidCredentials) => 1,
            Self::Task(err) if err.kind() != ErrorKind::Storage => 1,
            _ => 2,
        }
    }
}

fn parse_status(value: &str) -> Result<TaskStatus, ParseTaskStatusError> {
    TaskStatus::try_from(value)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            writeln!(io::stderr().lock(), "{err}").ok();
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<StorageConfig, ConfigError> {
    let config = match &cli.config {
        Some(path) => StorageConfig::load(path)?,
        None => StorageConfig::default(),
    };
    Ok(match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir.clone()),
        None => config,
    })
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    let app = FlatFileApp::open(&config, DefaultClock).inspect_err(|err| {
        tracing::error!(error = ?err, data_dir = %config.data_dir, "failed to open storage");
    })?;
    let actor = app.authentication.login(cli.email, cli.password)?;

    match cli.command {
        Command::List { format } => {
            let views = app.tasks.list_tasks(&actor)?;
            match format {
                OutputFormat::Text => write!(out, "{}", render_task_list(&views)?)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?,
            }
        }
        Command::Create {
            code,
            name,
            assignee,
        } => {
            let task = app.tasks.create_task(
                CreateTaskRequest::new(TaskCode::new(code), name, UserCode::new(assignee)),
                &actor,
            )?;
            writeln!(out, "Task {} created.", task.name())?;
        }
        Command::ChangeStatus { code, status } => {
            let task = app
                .tasks
                .change_status(ChangeStatusRequest::new(TaskCode::new(code), status), &actor)?;
            writeln!(out, "Task {} is now {}.", task.name(), task.status())?;
        }
    }
    Ok(())
}
