//! Journal command: show recent session activity.

use std::path::Path;

use chrono::{Duration, Utc};
use dayboard_core::config::loader::ConfigLoader;
use dayboard_core::journal::{JournalEntry, JournalService};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::JournalArgs;

/// Row for the journal table.
#[derive(Tabled)]
struct JournalRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Op")]
    op: String,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Details")]
    details: String,
}

impl JournalRow {
    fn from_entry(entry: &JournalEntry) -> Self {
        let mut meta: Vec<String> = entry
            .meta
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        meta.sort();

        Self {
            time: entry.ts.format("%Y-%m-%d %H:%M").to_string(),
            op: entry.op.to_string(),
            task: entry.id.clone(),
            source: entry.source.map(|s| s.to_string()).unwrap_or_default(),
            details: meta.join(" "),
        }
    }
}

/// Run the journal command.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: &JournalArgs) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    crate::logging::init(&cfg);

    let Some(journal) = JournalService::try_from_config(&cfg) else {
        println!("Journalling is disabled.");
        return;
    };

    let since = Utc::now() - Duration::days(args.days);
    let entries = match journal.read_entries(Some(since), None) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Failed to read journal: {e}");
            std::process::exit(1);
        }
    };

    if entries.is_empty() {
        println!("No journal entries in the last {} days.", args.days);
        return;
    }

    let rows: Vec<JournalRow> = entries.iter().map(JournalRow::from_entry).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
}
