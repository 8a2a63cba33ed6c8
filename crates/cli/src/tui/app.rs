//! Application state and update logic following The Elm Architecture.

use chrono::NaiveDate;

use dayboard_core::autofocus::{AutofocusSession, SessionStats};
use dayboard_core::journal::JournalService;

use crate::store::TaskStore;

/// Current operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reviewing the current task.
    Review,
    /// Queue is empty; showing the session summary.
    Done,
}

/// Feedback message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Dispositions
    Complete,
    Skip,
    NotToday,

    // Navigation
    SelectNext,
    SelectPrev,

    // Re-fetch the source list (the external store changed)
    Refresh,

    // System
    Quit,
}

/// Main application state.
pub struct App {
    /// The live autofocus session. Single writer; all mutations go
    /// through [`App::update`].
    pub session: AutofocusSession,

    /// External task store; receives the intents the session emits.
    store: TaskStore,

    /// Optional session journal.
    journal: Option<JournalService>,

    /// Today's date, fixed at session start.
    today: NaiveDate,

    /// Operating mode.
    pub mode: Mode,

    /// Title of the current task, resolved from the store.
    pub current_title: Option<String>,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(
        session: AutofocusSession,
        store: TaskStore,
        journal: Option<JournalService>,
        today: NaiveDate,
    ) -> Self {
        let mut app = App {
            session,
            store,
            journal,
            today,
            mode: Mode::Review,
            current_title: None,
            status: None,
            should_quit: false,
        };
        app.resolve_current();
        app
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Complete => self.complete(),
            Message::Skip => self.skip(),
            Message::NotToday => self.not_today(),
            Message::SelectNext => {
                self.session.select_next();
                self.resolve_current();
            }
            Message::SelectPrev => {
                self.session.select_previous();
                self.resolve_current();
            }
            Message::Refresh => self.refresh(),
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// End the session: journal the exit and return the final counters.
    pub fn finish(mut self) -> SessionStats {
        let stats = self.session.stats();
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log_exit(self.session.source(), &stats) {
                tracing::warn!("journal write failed: {e}");
            }
        }
        self.session.exit();
        stats
    }

    fn complete(&mut self) {
        let Some(id) = self.session.complete_current() else {
            return;
        };
        if let Err(e) = self.store.mark_done(&id) {
            tracing::error!("failed to mark {id} done: {e}");
            self.set_status(format!("Failed to save completion of {id}: {e}"), true);
        } else {
            self.set_status(format!("Completed {id}"), false);
        }
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log_complete(&id) {
                tracing::warn!("journal write failed: {e}");
            }
        }
        self.resolve_current();
    }

    fn skip(&mut self) {
        let Some(id) = self.session.current_task_id().map(ToString::to_string) else {
            return;
        };
        self.session.skip_current();
        self.set_status(format!("Skipped {id} to the end of the queue"), false);
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log_skip(&id) {
                tracing::warn!("journal write failed: {e}");
            }
        }
        self.resolve_current();
    }

    fn not_today(&mut self) {
        let Some(id) = self.session.mark_not_today() else {
            return;
        };
        if let Err(e) = self.store.mark_not_today(&id, self.today) {
            tracing::error!("failed to defer {id}: {e}");
            self.set_status(format!("Failed to save deferral of {id}: {e}"), true);
        } else {
            self.set_status(format!("{id} is out of today's scope"), false);
        }
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log_defer(&id) {
                tracing::warn!("journal write failed: {e}");
            }
        }
        self.resolve_current();
    }

    fn refresh(&mut self) {
        let ids = match self.store.ids_for(self.session.source(), self.today) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("failed to refresh queue: {e}");
                self.set_status(format!("Failed to refresh queue: {e}"), true);
                return;
            }
        };
        self.session.refresh_queue(ids);
        let remaining = self.session.stats().remaining;
        self.set_status(format!("Queue refreshed: {remaining} open"), false);
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log_refresh(remaining) {
                tracing::warn!("journal write failed: {e}");
            }
        }
        self.resolve_current();
    }

    /// Re-resolve the current task title and flip to Done when the queue
    /// has drained.
    fn resolve_current(&mut self) {
        match self.session.current_task_id() {
            Some(id) => {
                self.current_title = match self.store.title_of(id) {
                    Ok(title) => title,
                    Err(e) => {
                        tracing::error!("failed to resolve {id}: {e}");
                        None
                    }
                };
                self.mode = Mode::Review;
            }
            None => {
                self.current_title = None;
                self.mode = Mode::Done;
            }
        }
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage { text, is_error });
    }
}
