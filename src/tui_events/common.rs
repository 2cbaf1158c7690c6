//! Common helpers for TUI event handling.

use crate::tui::PortfolioTerminal;
use crate::tui_types::TuiView;

/// Handle pasted content into the prompt
pub fn handle_paste(app: &mut PortfolioTerminal, content: &str) {
    if app.view != TuiView::Prompt || app.is_busy() {
        return;
    }
    let clean_content = content.replace('\r', "").replace('\n', " ");
    let input = format!("{}{}", app.input, clean_content);
    app.set_input(input);
    app.autocomplete.open();
}
