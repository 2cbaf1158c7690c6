//! Loading splash shown before the prompt.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::commands::{format_footer_hints, CommandContext};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame, Terminal,
};

const PROGRESS_STEP: Duration = Duration::from_millis(50);
const TEXT_STEP: Duration = Duration::from_millis(400);
const DOTS_STEP: Duration = Duration::from_millis(300);
/// Pause at 100% before the splash goes away.
const LINGER: Duration = Duration::from_millis(500);

pub const STATUS_TEXTS: [&str; 6] = [
    "Initializing terminal...",
    "Loading system modules...",
    "Connecting to portfolio database...",
    "Loading command interface...",
    "Preparing user experience...",
    "Terminal ready!",
];

fn steps(elapsed: Duration, step: Duration) -> u128 {
    elapsed.as_millis() / step.as_millis()
}

/// Time at which progress first reads 100%.
pub fn full_at() -> Duration {
    PROGRESS_STEP * 50
}

/// Everything the splash shows at a given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashFrame {
    pub progress: u16,
    pub status: &'static str,
    pub dots: &'static str,
    pub done: bool,
}

impl SplashFrame {
    pub fn at(elapsed: Duration) -> Self {
        let progress = (steps(elapsed, PROGRESS_STEP) * 2).min(100) as u16;
        let text_index = (steps(elapsed, TEXT_STEP).saturating_sub(1) as usize)
            .min(STATUS_TEXTS.len() - 1);
        let dots = match steps(elapsed, DOTS_STEP) % 4 {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        };
        Self {
            progress,
            status: STATUS_TEXTS[text_index],
            dots,
            done: elapsed >= full_at() + LINGER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashOutcome {
    Finished,
    Skipped,
    /// Ctrl+C during the splash
    Quit,
}

pub fn draw_splash(f: &mut Frame, frame: &SplashFrame) {
    let area = centered_box(f.area(), 50, 9);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [icon, title, status, _, gauge, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Line::from("[ $ ]"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        icon,
    );
    f.render_widget(
        Paragraph::new(Line::from("Terminal Portfolio"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green)),
        title,
    );
    f.render_widget(
        Paragraph::new(Line::from(format!("{}{}", frame.status, frame.dots)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        status,
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .percent(frame.progress)
            .label(format!("{}%", frame.progress)),
        gauge,
    );
    f.render_widget(
        Paragraph::new(Line::from(format_footer_hints(CommandContext::Splash)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        hint,
    );
}

fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Animate the splash until it finishes or a key skips it.
pub fn run_splash(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<SplashOutcome> {
    let start = Instant::now();
    loop {
        let frame = SplashFrame::at(start.elapsed());
        if frame.done {
            tracing::debug!("splash finished");
            return Ok(SplashOutcome::Finished);
        }
        terminal.draw(|f| draw_splash(f, &frame))?;

        if event::poll(Duration::from_millis(16))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(SplashOutcome::Quit);
                }
                KeyCode::Enter | KeyCode::Esc => {
                    tracing::debug!(progress = frame.progress, "splash skipped");
                    return Ok(SplashOutcome::Skipped);
                }
                _ => {}
            }
        }
    }
}
