//! Task management commands.

use std::path::Path;

use chrono::Local;
use dayboard_core::autofocus::Source;
use dayboard_core::config::loader::ConfigLoader;
use dayboard_core::config::types::ResolvedConfig;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::store::{Bucket, TaskStore};
use crate::{TaskAddArgs, TaskCommands, TaskDoneArgs, TaskListArgs};

/// Row for the task table.
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "List")]
    bucket: String,
    #[tabled(rename = "Deferred")]
    deferred: String,
}

/// Run a task subcommand.
pub fn run(config: Option<&Path>, profile: Option<&str>, command: TaskCommands) {
    let cfg = load_config(config, profile);
    crate::logging::init(&cfg);

    let store = open_store(&cfg);

    match command {
        TaskCommands::Add(args) => add(&store, &args),
        TaskCommands::List(args) => list(&store, &args),
        TaskCommands::Done(args) => done(&store, &args),
    }
}

fn add(store: &TaskStore, args: &TaskAddArgs) {
    let bucket = if args.inbox { Bucket::Inbox } else { Bucket::Today };
    match store.add(&args.title, bucket) {
        Ok(id) => println!("Added {} to {}: {}", id, bucket.as_str(), args.title),
        Err(e) => {
            eprintln!("Failed to add task: {e}");
            std::process::exit(1);
        }
    }
}

fn list(store: &TaskStore, args: &TaskListArgs) {
    let source = match &args.source {
        Some(raw) => match raw.parse::<Source>() {
            Ok(s) => Some(s),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let today = Local::now().date_naive();
    let records = match store.list(source, today) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to list tasks: {e}");
            std::process::exit(1);
        }
    };

    if records.is_empty() {
        println!("No open tasks.");
        return;
    }

    let rows: Vec<TaskRow> = records
        .iter()
        .map(|r| TaskRow {
            id: r.id.clone(),
            title: r.title.clone(),
            bucket: r.bucket.as_str().to_string(),
            deferred: if r.not_today_on.is_some() { "not today".into() } else { String::new() },
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

fn done(store: &TaskStore, args: &TaskDoneArgs) {
    match store.mark_done(&args.id) {
        Ok(()) => println!("Marked {} as done.", args.id),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    }
}

fn open_store(cfg: &ResolvedConfig) -> TaskStore {
    if let Err(e) = std::fs::create_dir_all(&cfg.data_dir) {
        eprintln!("Failed to create data dir {}: {e}", cfg.data_dir.display());
        std::process::exit(1);
    }
    match TaskStore::open(&cfg.data_dir.join("tasks.db")) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open task store: {e}");
            std::process::exit(1);
        }
    }
}
