//! Prompt event handling: editing, history recall, submission.

use std::time::Instant;

use crate::sound::Cue;
use crate::tui::{PortfolioTerminal, DOUBLE_ESC_WINDOW};
use crossterm::event::{KeyCode, KeyModifiers};

pub fn handle_prompt_key(app: &mut PortfolioTerminal, key: KeyCode, modifiers: KeyModifiers) {
    match key {
        KeyCode::Esc => handle_esc(app),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        // Everything below edits the prompt, which is disabled while busy
        _ if app.is_busy() => {}
        KeyCode::Enter => app.submit(Instant::now()),
        KeyCode::Up => {
            if let Some(entry) = app.history.recall_previous().map(str::to_string) {
                recall(app, entry);
            }
        }
        KeyCode::Down => {
            if let Some(entry) = app.history.recall_next().map(str::to_string) {
                recall(app, entry);
            }
        }
        KeyCode::Tab => {
            app.autocomplete.update(&app.registry, &app.input);
            app.autocomplete.open();
            app.sound.play(Cue::Click);
        }
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.insert_char(c),
        _ => {}
    }
}

fn recall(app: &mut PortfolioTerminal, entry: String) {
    app.set_input(entry);
    app.autocomplete.close();
    app.sound.play(Cue::Hover);
}

fn handle_esc(app: &mut PortfolioTerminal) {
    if app.reveal.is_some() {
        app.finish_reveal();
        return;
    }
    if let Some(last) = app.last_esc_press
        && last.elapsed() < DOUBLE_ESC_WINDOW
    {
        app.should_quit = true;
        return;
    }
    app.last_esc_press = Some(Instant::now());
    app.status_message = Some("Press Esc again to quit".to_string());
}

#[cfg(test)]
mod tests {
    use crate::sound::Cue;
    use crate::test_helpers::{press, submit, test_app};
    use crossterm::event::KeyCode;
    use std::time::{Duration, Instant};

    #[test]
    fn history_recall_clamps_and_exits() {
        let (mut app, _) = test_app();
        submit(&mut app, "about");
        submit(&mut app, "skills");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "skills");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "about");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "about");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "skills");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "");
        assert!(!app.history.is_browsing());
    }

    #[test]
    fn down_without_browsing_does_nothing() {
        let (mut app, sink) = test_app();
        submit(&mut app, "about");
        let before = sink.cues().len();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "");
        assert_eq!(sink.cues().len(), before);
    }

    #[test]
    fn recall_plays_hover() {
        let (mut app, sink) = test_app();
        submit(&mut app, "date");
        press(&mut app, KeyCode::Up);
        assert_eq!(sink.cues().last(), Some(&Cue::Hover));
    }

    #[test]
    fn tab_opens_suggestions_with_click() {
        let (mut app, sink) = test_app();
        app.set_input("c");
        press(&mut app, KeyCode::Tab);
        assert!(app.autocomplete.is_visible());
        assert_eq!(sink.cues(), vec![Cue::Click]);
    }

    #[test]
    fn backspace_edits_input() {
        let (mut app, _) = test_app();
        app.set_input("helpx");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "help");
    }

    #[test]
    fn editing_is_disabled_while_busy() {
        let (mut app, _) = test_app();
        app.settings.command_delay = Duration::from_secs(10);
        app.set_input("help");
        app.submit(Instant::now());
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input, "");
        assert_eq!(app.transcript.len(), 1);
    }

    #[test]
    fn double_esc_quits() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        assert!(app.status_message.is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn stale_esc_does_not_quit() {
        let (mut app, _) = test_app();
        app.last_esc_press = Instant::now().checked_sub(Duration::from_secs(5));
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
    }

    #[test]
    fn esc_finishes_typewriter_first() {
        let (mut app, _) = test_app();
        app.settings.typing_speed = Duration::from_millis(30);
        submit(&mut app, "about");
        assert!(app.reveal.is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.reveal.is_none());
        assert!(app.last_esc_press.is_none());
    }
}
