mod cmd;
mod logging;
mod store;
mod tui;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dbd", version, about = "Terminal daily dashboard and autofocus review")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Review tasks one at a time in an autofocus session
    Review(ReviewArgs),

    /// Manage tasks in the local store
    #[command(subcommand)]
    Task(TaskCommands),

    /// Show recent session journal entries
    Journal(JournalArgs),
}

#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Task source: today, inbox or all (defaults to the last-used source)
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a task to today's list (or the inbox with --inbox)
    Add(TaskAddArgs),

    /// List open tasks
    List(TaskListArgs),

    /// Mark a task as done without a review session
    Done(TaskDoneArgs),
}

#[derive(Debug, Args)]
pub struct TaskAddArgs {
    /// Task title
    pub title: String,

    /// Add to the inbox instead of today's list
    #[arg(long)]
    pub inbox: bool,
}

#[derive(Debug, Args)]
pub struct TaskListArgs {
    /// Restrict to a source: today, inbox or all (default: all)
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Debug, Args)]
pub struct TaskDoneArgs {
    /// Task ID (e.g. TSK-012)
    pub id: String,
}

#[derive(Debug, Args)]
pub struct JournalArgs {
    /// How many days back to show
    #[arg(long, default_value_t = 7)]
    pub days: i64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Review(args) => {
            cmd::review::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Task(args) => {
            cmd::task::run(cli.config.as_deref(), cli.profile.as_deref(), args);
        }
        Commands::Journal(args) => {
            cmd::journal::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
    }
}
