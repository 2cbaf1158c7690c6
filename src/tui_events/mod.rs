//! TUI event handling functions.
//!
//! This module organizes event handlers by view type:
//! - `prompt`: Input line, history and submission
//! - `suggestions`: Autocomplete popup
//! - `resume`: Resume download dialog
//! - `common`: Shared utilities

mod common;
mod prompt;
mod resume;
mod suggestions;

pub use common::handle_paste;

use crate::tui::PortfolioTerminal;
use crate::tui_types::TuiView;
use crossterm::event::{KeyCode, KeyModifiers};

/// Handle keyboard events
pub fn handle_key_event(app: &mut PortfolioTerminal, key: KeyCode, modifiers: KeyModifiers) {
    // Clear status message on any keypress (except ESC for double-ESC logic)
    if key != KeyCode::Esc {
        app.status_message = None;
        app.last_esc_press = None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('s') => {
                app.toggle_sound();
                return;
            }
            KeyCode::Char('o') => {
                app.collapse_latest();
                return;
            }
            _ => {}
        }
    }

    match &app.view {
        TuiView::ResumeDialog { .. } => {
            resume::handle_resume_key(app, key);
        }
        TuiView::Prompt if app.autocomplete.is_visible() => {
            if !suggestions::handle_suggestions_key(app, key) {
                prompt::handle_prompt_key(app, key, modifiers);
            }
        }
        TuiView::Prompt => {
            prompt::handle_prompt_key(app, key, modifiers);
        }
    }
}
