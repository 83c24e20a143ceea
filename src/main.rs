#![forbid(unsafe_code)]

//! `todo-keeper` — single-user to-do list binary.
//!
//! `serve` runs the create/list HTTP API. Every other subcommand works on
//! the local task store: it hydrates the list, applies one operation,
//! saves, and prints the result.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

use todo_keeper::api::{server, AppState};
use todo_keeper::models::priority::Priority;
use todo_keeper::models::task::TaskId;
use todo_keeper::persistence::db;
use todo_keeper::session::TaskSession;
use todo_keeper::state::TaskList;
use todo_keeper::storage::{FileStorage, PersistenceBridge};
use todo_keeper::{AppError, GlobalConfig, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "todo-keeper", about = "Single-user to-do list", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (`GET`/`POST /api/todos`).
    Serve,

    /// Show the local task list.
    List,

    /// Add a task to the local list.
    Add {
        /// Task description.
        text: String,
        /// Priority tag: high, medium, or low.
        #[arg(long, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// Flip a task between done and not done.
    Toggle {
        /// Task identifier.
        id: TaskId,
    },

    /// Replace the text of a task.
    Edit {
        /// Task identifier.
        id: TaskId,
        /// New description.
        text: String,
    },

    /// Remove a task.
    Delete {
        /// Task identifier.
        id: TaskId,
    },

    /// Mark every task done.
    CompleteAll,

    /// Remove every task.
    Clear,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;

    let config = match &args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };

    match args.command {
        Command::Serve => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
            .block_on(run_server(config)),
        command => run_local(&config, command),
    }
}

async fn run_server(config: GlobalConfig) -> Result<()> {
    info!("todo-keeper server bootstrap");

    let database = if config.uses_memory_db() {
        db::connect_memory().await?
    } else {
        db::connect(&config.db_path).await?
    };
    info!(db_path = %config.db_path, "database connected");

    let state = Arc::new(AppState {
        config: Arc::new(config),
        db: Arc::new(database),
    });

    let ct = CancellationToken::new();
    let signal_ct = ct.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("shutdown signal received");
        signal_ct.cancel();
    });

    let result = server::serve(state, ct).await;
    if let Err(ref err) = result {
        error!(%err, "HTTP API failed");
    }
    info!("todo-keeper shut down");
    result
}

fn run_local(config: &GlobalConfig, command: Command) -> Result<()> {
    let storage = FileStorage::open(&config.storage_path)?;
    let bridge = PersistenceBridge::new(storage, config.storage_key.clone());
    let mut session = TaskSession::open(bridge).map_err(|err| {
        error!(%err, path = %config.storage_path.display(), "cannot load task list");
        err
    })?;

    match command {
        Command::Serve | Command::List => {}
        Command::Add { text, priority } => {
            if session.add(&text, priority)?.is_none() {
                debug!("blank task text ignored");
            }
        }
        Command::Toggle { id } => report_missing(session.toggle(id)?, id),
        Command::Edit { id, text } => {
            let found = session.start_edit(id, &text);
            let committed = found && session.commit_edit(id, &text)?;
            if found && !committed {
                session.cancel_edit();
                debug!(id, "blank edit ignored");
            }
            report_missing(found, id);
        }
        Command::Delete { id } => report_missing(session.delete(id)?, id),
        Command::CompleteAll => {
            session.complete_all()?;
        }
        Command::Clear => {
            session.clear_all()?;
        }
    }

    print!("{}", render(session.list()));
    Ok(())
}

fn report_missing(found: bool, id: TaskId) {
    if !found {
        println!("no task with id {id}");
    }
}

fn render(list: &TaskList) -> String {
    if list.is_empty() {
        return "No tasks yet.\n".into();
    }

    let mut out = String::new();
    for task in list.tasks() {
        let mark = if task.completed { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "[{mark}] {id:>14}  {priority:<6}  {text}",
            id = task.id,
            priority = task.priority,
            text = task.text,
        );
    }
    let _ = writeln!(
        out,
        "{} of {} completed",
        list.completed_count(),
        list.len()
    );
    out
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
