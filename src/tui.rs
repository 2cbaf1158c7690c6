//! TUI main module - the portfolio terminal.
//!
//! The implementation is split across several modules:
//! - `tui_types`: View state and type definitions
//! - `tui_draw`: UI rendering functions
//! - `tui_events`: Keyboard event handling
//! - `tui_utils`: Utility functions

// Re-export types for external use
pub use crate::tui_types::{PendingCommand, Reveal, TerminalSettings, TuiView};

use crate::autocomplete::Autocomplete;
use crate::commands::{dispatch, CommandContext, CommandOutput, CommandRegistry, Dispatch};
use crate::history::History;
use crate::portfolio::Portfolio;
use crate::sound::{Cue, SoundBoard};
use crate::splash::{run_splash, SplashOutcome};
use crate::transcript::Transcript;
use crate::typewriter::{Typewriter, TypewriterHooks};

// Import from internal modules
use crate::tui_draw::draw_ui;
use crate::tui_events::{handle_key_event, handle_paste};

use chrono::Local;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Delay between a command's output and its success chord
pub const SUCCESS_CUE_DELAY: Duration = Duration::from_millis(200);
/// Window for the second Esc press that quits
pub const DOUBLE_ESC_WINDOW: Duration = Duration::from_secs(2);
/// Frame poll interval; short enough for a smooth typewriter
const FRAME_POLL: Duration = Duration::from_millis(15);

/// Main TUI state
pub struct PortfolioTerminal {
    pub portfolio: Portfolio,
    pub registry: CommandRegistry,
    pub transcript: Transcript,
    pub history: History,
    pub autocomplete: Autocomplete,
    pub input: String,
    pub view: TuiView,
    pub show_welcome: bool,
    pub pending: Option<PendingCommand>,
    pub reveal: Option<Reveal>,
    pub sound: SoundBoard,
    pub settings: TerminalSettings,
    /// Rows scrolled up from the bottom; 0 follows new output
    pub scroll_from_bottom: u16,
    /// Transcript viewport height from the last frame
    pub viewport_height: u16,
    pub status_message: Option<String>,
    // Last ESC press time for double-ESC quit
    pub last_esc_press: Option<Instant>,
    pub should_quit: bool,
}

/// Routes typewriter progress to sound cues.
struct RevealSounds<'a> {
    sound: &'a SoundBoard,
}

impl TypewriterHooks for RevealSounds<'_> {
    fn on_char(&mut self, _ch: char) {
        self.sound.play(Cue::Typewriter);
    }

    fn on_line_bell(&mut self) {
        self.sound.play(Cue::TypewriterBell);
    }
}

impl PortfolioTerminal {
    pub fn new(portfolio: Portfolio, sound: SoundBoard, settings: TerminalSettings) -> Self {
        let registry = CommandRegistry::new();
        let autocomplete = Autocomplete::new(&registry);
        Self {
            portfolio,
            registry,
            transcript: Transcript::new(),
            history: History::new(),
            autocomplete,
            input: String::new(),
            view: TuiView::Prompt,
            show_welcome: true,
            pending: None,
            reveal: None,
            sound,
            settings,
            scroll_from_bottom: 0,
            viewport_height: 0,
            status_message: None,
            last_esc_press: None,
            should_quit: false,
        }
    }

    /// The prompt is disabled while a command is processing.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Shortcut context for the footer and help.
    pub fn context(&self) -> CommandContext {
        match self.view {
            TuiView::ResumeDialog { .. } => CommandContext::ResumeDialog,
            TuiView::Prompt if self.autocomplete.is_visible() => CommandContext::Suggestions,
            TuiView::Prompt => CommandContext::Prompt,
        }
    }

    /// Replace the input line and recompute suggestions.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.autocomplete.update(&self.registry, &self.input);
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.autocomplete.update(&self.registry, &self.input);
        self.autocomplete.open();
        self.sound.play(Cue::Typing);
    }

    pub fn delete_char(&mut self) {
        self.input.pop();
        self.autocomplete.update(&self.registry, &self.input);
    }

    /// Submit the current input line.
    pub fn submit(&mut self, now: Instant) {
        if self.is_busy() {
            return;
        }

        let raw = std::mem::take(&mut self.input);
        self.autocomplete.close();
        self.autocomplete.update(&self.registry, "");

        let result = dispatch(&raw, &self.portfolio, &Local::now());
        if result == Dispatch::Ignored {
            return;
        }

        self.sound.play(Cue::Command);
        self.history.submit(&raw);
        self.scroll_from_bottom = 0;

        match result {
            Dispatch::Ignored => {}
            Dispatch::Clear => {
                tracing::debug!("transcript cleared");
                self.transcript.clear();
                self.reveal = None;
                self.show_welcome = true;
            }
            Dispatch::Output(output) => {
                tracing::debug!(input = raw.trim(), "command dispatched");
                self.show_welcome = false;
                let id = self.transcript.push(&raw);
                self.pending = Some(PendingCommand {
                    id,
                    output,
                    due: now + self.settings.command_delay,
                });
            }
        }
    }

    /// Advance timers: deliver a due command output and step the typewriter.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.as_ref().is_some_and(|p| p.due <= now)
            && let Some(pending) = self.pending.take()
        {
            self.deliver(pending);
        }

        if let Some(reveal) = &mut self.reveal {
            let mut hooks = RevealSounds { sound: &self.sound };
            reveal.typewriter.tick(now, &mut hooks);
            if reveal.typewriter.is_completed() {
                self.reveal = None;
            }
        }
    }

    fn deliver(&mut self, pending: PendingCommand) {
        let PendingCommand { id, output, .. } = pending;

        if output.is_error() {
            tracing::info!("unknown command: {:?}", self.transcript.get(id).map(|e| &e.input));
            self.sound.play(Cue::Error);
        } else {
            self.sound.play_after(Cue::Success, SUCCESS_CUE_DELAY);
        }

        match &output {
            CommandOutput::About { text } => {
                self.reveal = Some(Reveal {
                    id,
                    typewriter: Typewriter::new(text.clone(), self.settings.typing_speed),
                });
            }
            CommandOutput::Resume(_) => {
                self.view = TuiView::ResumeDialog { exported: None };
            }
            _ => {}
        }

        self.transcript.attach_output(id, output);
    }

    /// Show the rest of a running typewriter reveal at once.
    pub fn finish_reveal(&mut self) {
        if let Some(mut reveal) = self.reveal.take() {
            let mut hooks = RevealSounds { sound: &self.sound };
            reveal.typewriter.finish(&mut hooks);
        }
    }

    /// Revealed prefix for an entry whose output is still being typed out.
    pub fn revealed_text(&self, id: uuid::Uuid) -> Option<&str> {
        self.reveal
            .as_ref()
            .filter(|r| r.id == id)
            .map(|r| r.typewriter.visible())
    }

    pub fn toggle_sound(&mut self) {
        let enabled = self.sound.toggle();
        self.status_message = Some(if enabled { "Sound on" } else { "Sound off" }.to_string());
    }

    /// Collapse or expand the most recent output.
    pub fn collapse_latest(&mut self) {
        let Some(id) = self.transcript.latest_with_output().map(|e| e.id) else {
            return;
        };
        if self.transcript.toggle_collapsed(id) {
            self.sound.play(Cue::Click);
        }
    }

    pub fn scroll_up(&mut self) {
        let page = self.viewport_height.max(2) / 2;
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(page);
    }

    pub fn scroll_down(&mut self) {
        let page = self.viewport_height.max(2) / 2;
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(page);
    }

    /// How long the event loop may block before the next timer fires.
    pub fn next_deadline(&self, now: Instant) -> Duration {
        let pending = self
            .pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now));
        let reveal = self
            .reveal
            .as_ref()
            .and_then(|r| r.typewriter.time_until_next(now));
        [pending, reveal]
            .into_iter()
            .flatten()
            .chain(std::iter::once(FRAME_POLL))
            .min()
            .unwrap_or(FRAME_POLL)
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run_terminal(
    portfolio: Portfolio,
    sound: SoundBoard,
    settings: TerminalSettings,
    show_splash: bool,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, portfolio, sound, settings, show_splash);

    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    portfolio: Portfolio,
    sound: SoundBoard,
    settings: TerminalSettings,
    show_splash: bool,
) -> io::Result<()> {
    if show_splash && run_splash(terminal)? == SplashOutcome::Quit {
        return Ok(());
    }

    let mut app = PortfolioTerminal::new(portfolio, sound, settings);

    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|f| draw_ui(f, &mut app))?;

        if event::poll(app.next_deadline(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code, key.modifiers);
                }
                Event::Paste(content) => {
                    handle_paste(&mut app, &content);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;

    fn run(app: &mut PortfolioTerminal, input: &str) {
        app.set_input(input);
        app.submit(Instant::now());
        app.tick(Instant::now());
    }

    #[test]
    fn blank_input_appends_nothing() {
        let (mut app, sink) = test_app();
        run(&mut app, "   ");
        assert!(app.transcript.is_empty());
        assert!(app.history.is_empty());
        assert!(app.show_welcome);
        assert!(sink.cues().is_empty());
    }

    #[test]
    fn every_registry_command_dispatches() {
        for spec in CommandRegistry::new().specs() {
            let (mut app, _) = test_app();
            run(&mut app, &format!("  {}  ", spec.name.to_uppercase()));
            if spec.name == "clear" {
                assert!(app.transcript.is_empty());
                continue;
            }
            let entry = &app.transcript.entries()[0];
            let output = entry.output.as_ref().expect("output attached");
            assert!(!output.is_error(), "{} hit the error path", spec.name);
        }
    }

    #[test]
    fn output_waits_for_delay() {
        let (mut app, _) = test_app();
        app.settings.command_delay = Duration::from_millis(500);
        let start = Instant::now();
        app.set_input("help");
        app.submit(start);

        assert!(app.is_busy());
        app.tick(start + Duration::from_millis(100));
        assert!(app.transcript.entries()[0].output.is_none());

        app.tick(start + Duration::from_millis(500));
        assert!(!app.is_busy());
        assert!(app.transcript.entries()[0].output.is_some());
    }

    #[test]
    fn submit_is_ignored_while_busy() {
        let (mut app, _) = test_app();
        app.settings.command_delay = Duration::from_secs(10);
        app.set_input("help");
        app.submit(Instant::now());
        app.set_input("about");
        app.submit(Instant::now());
        assert_eq!(app.transcript.len(), 1);
        assert_eq!(app.input, "about");
    }

    #[test]
    fn clear_restores_welcome_and_keeps_history() {
        let (mut app, _) = test_app();
        run(&mut app, "help");
        assert!(!app.show_welcome);
        run(&mut app, "clear");
        assert!(app.transcript.is_empty());
        assert!(app.show_welcome);
        assert_eq!(app.history.entries(), ["help", "clear"]);
    }

    #[test]
    fn unknown_command_plays_error() {
        let (mut app, sink) = test_app();
        run(&mut app, "foo");
        let output = app.transcript.entries()[0].output.clone().unwrap();
        assert!(output.is_error());
        assert_eq!(sink.cues(), vec![Cue::Command, Cue::Error]);
    }

    #[test]
    fn known_command_plays_success() {
        let (mut app, sink) = test_app();
        run(&mut app, "whoami");
        assert_eq!(sink.cues(), vec![Cue::Command, Cue::Success]);
    }

    #[test]
    fn about_is_typed_out() {
        let (mut app, _) = test_app();
        app.settings.typing_speed = Duration::from_millis(30);
        run(&mut app, "about");
        let id = app.transcript.entries()[0].id;
        assert_eq!(app.revealed_text(id), Some(""));

        app.finish_reveal();
        assert!(app.reveal.is_none());
        assert_eq!(app.revealed_text(id), None);
    }

    #[test]
    fn resume_opens_dialog() {
        let (mut app, _) = test_app();
        run(&mut app, "resume");
        assert_eq!(app.view, TuiView::ResumeDialog { exported: None });
        assert_eq!(app.context(), CommandContext::ResumeDialog);
    }

    #[test]
    fn collapse_latest_toggles_last_output() {
        let (mut app, _) = test_app();
        run(&mut app, "help");
        run(&mut app, "ls");
        app.collapse_latest();
        assert!(app.transcript.entries()[1].collapsed);
        assert!(!app.transcript.entries()[0].collapsed);
        app.collapse_latest();
        assert!(!app.transcript.entries()[1].collapsed);
    }

    #[test]
    fn toggle_sound_reports_state() {
        let (mut app, _) = test_app();
        app.toggle_sound();
        assert!(!app.sound.is_enabled());
        assert_eq!(app.status_message.as_deref(), Some("Sound off"));
    }

    #[test]
    fn next_deadline_tracks_pending_output() {
        let (mut app, _) = test_app();
        let now = Instant::now();
        assert_eq!(app.next_deadline(now), FRAME_POLL);
        app.settings.command_delay = Duration::from_millis(5);
        app.set_input("help");
        app.submit(now);
        assert!(app.next_deadline(now) <= Duration::from_millis(5));
    }
}
