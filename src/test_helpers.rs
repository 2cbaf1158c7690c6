use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::text::Line;

use crate::portfolio::Portfolio;
use crate::sound::{Cue, SoundBoard, SoundSink};
use crate::tui::{PortfolioTerminal, TerminalSettings};
use crate::tui_events::handle_key_event;

/// Sink that remembers every cue it was asked to play.
#[derive(Default)]
pub struct RecordingSink {
    cues: Mutex<Vec<Cue>>,
}

impl RecordingSink {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl SoundSink for RecordingSink {
    fn play(&self, cue: Cue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}

/// App with the sample portfolio, no delays, and sound recorded.
pub fn test_app() -> (PortfolioTerminal, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let settings = TerminalSettings {
        command_delay: Duration::ZERO,
        typing_speed: Duration::ZERO,
        download_dir: std::env::temp_dir(),
    };
    let app = PortfolioTerminal::new(
        Portfolio::default(),
        SoundBoard::new(sink.clone(), true),
        settings,
    );
    (app, sink)
}

pub fn press(app: &mut PortfolioTerminal, key: KeyCode) {
    handle_key_event(app, key, KeyModifiers::NONE);
}

pub fn type_str(app: &mut PortfolioTerminal, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Submit `input` and let its output land.
pub fn submit(app: &mut PortfolioTerminal, input: &str) {
    app.set_input(input);
    app.submit(Instant::now());
    app.tick(Instant::now());
}

/// Plain text of rendered lines, one line per row.
pub fn lines_to_string(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain text of a rendered buffer, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
