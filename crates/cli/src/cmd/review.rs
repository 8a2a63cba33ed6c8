//! Review command: run an autofocus session over the task queue.
//!
//! Resolves the source (flag, else the last-used one), pulls the matching
//! identifiers from the task store and hands everything to the TUI. The
//! empty-queue case never enters the TUI.

use std::path::Path;

use chrono::Local;
use dayboard_core::autofocus::{AutofocusSession, Source};
use dayboard_core::config::loader::ConfigLoader;
use dayboard_core::journal::JournalService;
use dayboard_core::storage::{FallbackStore, FileStore, MemoryStore};

use crate::store::TaskStore;
use crate::ReviewArgs;

/// Run the review command.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ReviewArgs) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    crate::logging::init(&cfg);

    if let Err(e) = std::fs::create_dir_all(&cfg.data_dir) {
        eprintln!("Failed to create data dir {}: {e}", cfg.data_dir.display());
        std::process::exit(1);
    }

    let tasks = match TaskStore::open(&cfg.data_dir.join("tasks.db")) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open task store: {e}");
            std::process::exit(1);
        }
    };

    let state = FallbackStore::new(FileStore::new(&cfg.data_dir), MemoryStore::new());
    let mut session = AutofocusSession::new(Box::new(state));

    let source = match &args.source {
        Some(raw) => match raw.parse::<Source>() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => session.source(),
    };

    let today = Local::now().date_naive();
    let ids = match tasks.ids_for(source, today) {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("Failed to fetch tasks: {e}");
            std::process::exit(1);
        }
    };

    let journal = JournalService::try_from_config(&cfg);
    if let Some(j) = &journal {
        if let Err(e) = j.rotate_if_needed() {
            tracing::warn!("journal rotation failed: {e}");
        }
    }

    session.start(source, ids);

    if session.current_task_id().is_none() {
        println!("Nothing to review for source '{source}'.");
        session.exit();
        return;
    }

    if let Some(j) = &journal {
        if let Err(e) = j.log_start(source, session.stats().remaining) {
            tracing::warn!("journal write failed: {e}");
        }
    }

    match crate::tui::run(session, tasks, journal, today) {
        Ok(stats) => {
            println!("Session over: {stats}.");
        }
        Err(e) => {
            eprintln!("Review session failed: {e}");
            std::process::exit(1);
        }
    }
}
