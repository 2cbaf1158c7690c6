//! Autocomplete popup event handling.

use crate::sound::Cue;
use crate::tui::PortfolioTerminal;
use crossterm::event::KeyCode;

/// Handle a key while the popup is visible. Returns false when the key
/// should fall through to the prompt.
pub fn handle_suggestions_key(app: &mut PortfolioTerminal, key: KeyCode) -> bool {
    match key {
        KeyCode::Up => {
            app.autocomplete.previous();
            true
        }
        KeyCode::Down => {
            app.autocomplete.next();
            true
        }
        KeyCode::Esc => {
            let replacement = app.autocomplete.cancel();
            apply_completion(app, replacement);
            true
        }
        KeyCode::Enter | KeyCode::Tab => {
            let already_typed = app
                .autocomplete
                .highlighted()
                .is_some_and(|spec| spec.name == app.input.trim().to_lowercase());
            if key == KeyCode::Enter && already_typed {
                return false;
            }
            if let Some(name) = app.autocomplete.select() {
                apply_completion(app, name);
                app.sound.play(Cue::Success);
            }
            true
        }
        _ => false,
    }
}

/// Put a completion into the prompt. An empty value leaves the input alone.
fn apply_completion(app: &mut PortfolioTerminal, value: &str) {
    if !value.is_empty() {
        app.input = value.to_string();
    }
}
