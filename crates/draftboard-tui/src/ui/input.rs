//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use draftboard_core::board::{SortKey, StatView};

use crate::app::{
    can_add_author_char, can_add_note_char, App, AppState, NoteField, Screen, PAGE_SCROLL_SIZE,
};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Any key clears a stale status message
    app.status_message = None;

    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // Handle note form
    if matches!(app.state, AppState::AddingNote) {
        handle_note_input(app, key);
        return Ok(false);
    }

    // Handle search mode
    if matches!(app.state, AppState::Searching) {
        handle_search_input(app, key);
        return Ok(false);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        _ => match app.screen {
            Screen::Board => handle_board_input(app, key),
            Screen::Profile => handle_profile_input(app, key),
        },
    }

    Ok(false)
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
            app.search_query.clear();
            app.board_selection = 0;
        }
        KeyCode::Enter => {
            app.state = AppState::Normal;
            // Keep search query active
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.board_selection = 0;
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            // Reset selection when search changes
            app.board_selection = 0;
        }
        _ => {}
    }
}

fn handle_board_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-(PAGE_SCROLL_SIZE as isize)),
        KeyCode::PageDown => app.move_selection(PAGE_SCROLL_SIZE as isize),
        KeyCode::Home => app.board_selection = 0,
        KeyCode::End => {
            app.board_selection = app.board_len().saturating_sub(1);
        }
        KeyCode::Enter => app.open_profile(),
        KeyCode::Char('/') => {
            app.state = AppState::Searching;
            app.search_query.clear();
            app.board_selection = 0;
        }
        KeyCode::Char('a') => app.toggle_sort(SortKey::Composite),
        KeyCode::Char(c @ '1'..='9') => {
            // Digits address sources by board column, starting at 1
            let index = c as usize - '1' as usize;
            app.toggle_source_sort(index);
        }
        KeyCode::Esc => {
            app.search_query.clear();
            app.board_selection = 0;
        }
        _ => {}
    }
}

fn handle_profile_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.close_profile(),
        KeyCode::Char('t') => app.set_stat_view(StatView::Total),
        KeyCode::Char('c') => app.set_stat_view(StatView::Counting),
        KeyCode::Char('s') => app.set_stat_view(StatView::Scoring),
        KeyCode::Char('v') => app.set_stat_view(app.stat_view.next()),
        KeyCode::Char('V') => app.set_stat_view(app.stat_view.prev()),
        KeyCode::Char(']') | KeyCode::Right => app.cycle_season(true),
        KeyCode::Char('[') | KeyCode::Left => app.cycle_season(false),
        KeyCode::Char('n') => app.start_note(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.reports_scroll = app.reports_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.reports_scroll = app.reports_scroll.saturating_add(1);
        }
        _ => {}
    }
}

fn handle_note_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_note(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.note_focus = match app.note_focus {
                NoteField::Author => NoteField::Text,
                NoteField::Text => NoteField::Author,
            };
        }
        KeyCode::Enter => match app.note_focus {
            NoteField::Author => app.note_focus = NoteField::Text,
            NoteField::Text => {
                app.submit_note();
            }
        },
        KeyCode::Backspace => match app.note_focus {
            NoteField::Author => {
                app.note_author.pop();
            }
            NoteField::Text => {
                app.note_text.pop();
            }
        },
        KeyCode::Char(c) => match app.note_focus {
            NoteField::Author => {
                if can_add_author_char(app.note_author.chars().count(), c) {
                    app.note_author.push(c);
                }
            }
            NoteField::Text => {
                if can_add_note_char(app.note_text.chars().count(), c) {
                    app.note_text.push(c);
                }
            }
        },
        _ => {}
    }
}
