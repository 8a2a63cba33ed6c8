//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Message, Mode};

/// Map a key event to an optional message based on current app mode.
pub fn map_key_event(app: &App, key: KeyEvent) -> Option<Message> {
    // Global bindings (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match app.mode {
        Mode::Review => map_review_keys(key),
        Mode::Done => map_done_keys(key),
    }
}

fn map_review_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Dispositions
        KeyCode::Char('c') | KeyCode::Enter => Some(Message::Complete),
        KeyCode::Char('s') => Some(Message::Skip),
        KeyCode::Char('n') => Some(Message::NotToday),
        KeyCode::Char('r') => Some(Message::Refresh),

        // Vim-style navigation
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => Some(Message::SelectNext),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => Some(Message::SelectPrev),

        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),

        _ => None,
    }
}

fn map_done_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
            Some(Message::Quit)
        }
        _ => None,
    }
}
