//! TUI rendering functions.

use std::path::Path;

use crate::commands::{format_footer_hints, render_output, welcome_lines, CommandSpec, ResumePreview};
use crate::transcript::TranscriptEntry;
use crate::tui_types::TuiView;
use crate::tui_utils::truncate_str;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::PortfolioTerminal;

/// Most suggestion rows shown at once
const MAX_SUGGESTION_ROWS: usize = 6;

/// Main UI dispatcher
pub fn draw_ui(f: &mut Frame, app: &mut PortfolioTerminal) {
    let has_status = app.status_message.is_some();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(if has_status { 1 } else { 0 }),
        Constraint::Length(1),
    ])
    .split(f.area());

    draw_header(f, chunks[0], &app.portfolio.profile.name);

    let body = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = body.inner(chunks[1]);
    f.render_widget(body, chunks[1]);

    let [transcript_area, prompt_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    draw_transcript(f, transcript_area, app);
    draw_prompt(f, prompt_area, &app.input, app.is_busy());

    if let Some(message) = &app.status_message {
        draw_status_bar(f, chunks[2], message);
    }
    draw_footer(f, chunks[3], app);

    match &app.view {
        TuiView::Prompt => {
            if app.autocomplete.is_visible() {
                draw_suggestions(
                    f,
                    prompt_area,
                    app.autocomplete.matches(),
                    app.autocomplete.selected(),
                );
            }
        }
        TuiView::ResumeDialog { exported } => {
            let preview = latest_resume_preview(app);
            draw_resume_dialog(
                f,
                preview.as_ref(),
                &app.settings.download_dir,
                exported.as_deref(),
            );
        }
    }
}

/// Window chrome: three dots and a title
fn draw_header(f: &mut Frame, area: Rect, name: &str) {
    let dot = |color| Span::styled("\u{25cf} ", Style::default().fg(color));
    let user = name
        .split_whitespace()
        .next()
        .unwrap_or("guest")
        .to_lowercase();
    let line = Line::from(vec![
        dot(Color::Red),
        dot(Color::Yellow),
        dot(Color::Green),
        Span::styled(
            format!(" {}@portfolio: ~", user),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn entry_lines(app: &PortfolioTerminal, entry: &TranscriptEntry) -> Vec<Line<'static>> {
    let marker = match (&entry.output, entry.collapsed) {
        (Some(_), true) => " [+]",
        (Some(_), false) => " [-]",
        (None, _) => "",
    };
    let mut lines = vec![Line::from(vec![
        Span::styled("$ ", Style::default().fg(Color::Green)),
        Span::styled(entry.input.clone(), Style::default().fg(Color::White)),
        Span::styled(marker, Style::default().fg(Color::DarkGray)),
    ])];

    match &entry.output {
        Some(_) if entry.collapsed => {}
        Some(output) => {
            let reveal = app.revealed_text(entry.id);
            for line in render_output(output, reveal) {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  Processing...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }
    lines.push(Line::from(""));
    lines
}

/// Draw welcome banner and entries, pinned to the bottom unless scrolled up
fn draw_transcript(f: &mut Frame, area: Rect, app: &mut PortfolioTerminal) {
    let mut lines = Vec::new();
    if app.show_welcome {
        lines.extend(welcome_lines());
    }
    for entry in app.transcript.entries() {
        lines.extend(entry_lines(app, entry));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(area.height);
    app.viewport_height = area.height;
    app.scroll_from_bottom = app.scroll_from_bottom.min(max_scroll);
    let offset = max_scroll - app.scroll_from_bottom;

    f.render_widget(paragraph.scroll((offset, 0)), area);
}

/// Draw the `$ ` input line; disabled while a command is processing
fn draw_prompt(f: &mut Frame, area: Rect, input: &str, busy: bool) {
    let mut spans = vec![Span::styled(
        "$ ",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];
    if busy {
        spans.push(Span::styled(
            input.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else if input.is_empty() {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Green)));
        spans.push(Span::styled(
            " Type a command...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(input.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Green)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the suggestion popup just above the prompt line
pub fn draw_suggestions(f: &mut Frame, prompt: Rect, matches: &[CommandSpec], selected: usize) {
    let rows = matches.len().min(MAX_SUGGESTION_ROWS);
    let height = (rows as u16 + 2).min(prompt.y);
    let width = 48.min(prompt.width);
    if height < 3 || width < 10 {
        return;
    }
    let area = Rect::new(prompt.x, prompt.y - height, width, height);

    let count = if matches.len() == 1 {
        " 1 command found ".to_string()
    } else {
        format!(" {} commands found ", matches.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(count)
        .title_bottom(" \u{2191}/\u{2193} to navigate \u{2022} Enter to select \u{2022} Esc to close ")
        .border_style(Style::default().fg(Color::Cyan));

    // Keep the selected row in view
    let first = selected.saturating_sub(rows.saturating_sub(1));
    let desc_width = (width as usize).saturating_sub(18);
    let items: Vec<ListItem> = matches
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .map(|(i, spec)| {
            let is_selected = i == selected;
            let prefix = if is_selected { "\u{25b8} " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::raw(prefix),
                Span::styled(
                    format!("{:<12}", spec.name),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate_str(spec.description, desc_width),
                    Style::default().fg(Color::Gray),
                ),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(List::new(items).block(block), area);
}

/// Preview of the entry that opened the dialog
fn latest_resume_preview(app: &PortfolioTerminal) -> Option<ResumePreview> {
    app.transcript.entries().iter().rev().find_map(|e| match &e.output {
        Some(crate::commands::CommandOutput::Resume(preview)) => Some(preview.clone()),
        _ => None,
    })
}

pub fn draw_resume_dialog(
    f: &mut Frame,
    preview: Option<&ResumePreview>,
    download_dir: &Path,
    exported: Option<&Path>,
) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Download Resume ")
        .border_style(Style::default().fg(Color::Green));

    let row = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{:<12}", name),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(Color::Gray)),
        ])
    };

    let mut lines = Vec::new();
    if let Some(preview) = preview {
        lines.push(row("Name:", preview.name.clone()));
        lines.push(row("Title:", preview.title.clone()));
        lines.push(row("Experience:", preview.years_experience.clone()));
        lines.push(row("Skills:", preview.skills_summary.clone()));
        let format = if preview.has_pdf { "PDF" } else { "Plain text" };
        lines.push(row("Format:", format.to_string()));
    }
    lines.push(row("Save to:", download_dir.display().to_string()));
    lines.push(Line::from(""));

    match exported {
        Some(path) => {
            lines.push(Line::from(Span::styled(
                format!("\u{2713} Saved {}", path.display()),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(Span::styled(
                "o open \u{2502} Enter download again \u{2502} Esc close",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Enter download \u{2502} Esc close",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Draw status bar
pub fn draw_status_bar(f: &mut Frame, area: Rect, message: &str) {
    let color = if message.contains("Failed") || message.contains("No ") {
        Color::Red
    } else {
        Color::Green
    };

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Version, key hints and sound state
fn draw_footer(f: &mut Frame, area: Rect, app: &PortfolioTerminal) {
    let sound = if app.sound.is_enabled() {
        "\u{266a} on "
    } else {
        "\u{266a} off "
    };
    let version = format!(" Terminal Portfolio v{}", env!("CARGO_PKG_VERSION"));

    let [left, middle, right] = Layout::horizontal([
        Constraint::Length(version.chars().count() as u16),
        Constraint::Min(0),
        Constraint::Length(sound.chars().count() as u16),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(version).style(Style::default().fg(Color::DarkGray)),
        left,
    );
    f.render_widget(
        Paragraph::new(fit_hints(&format_footer_hints(app.context()), middle.width))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        middle,
    );
    f.render_widget(
        Paragraph::new(sound).style(Style::default().fg(if app.sound.is_enabled() {
            Color::Green
        } else {
            Color::DarkGray
        })),
        right,
    );
}

/// Drop trailing hints until the string fits in `width` columns
fn fit_hints(hints: &str, width: u16) -> String {
    let width = width as usize;
    let mut parts: Vec<&str> = hints.trim().split(" \u{2502} ").collect();
    while !parts.is_empty() {
        let joined = format!(" {} ", parts.join(" \u{2502} "));
        if joined.chars().count() <= width {
            return joined;
        }
        parts.pop();
    }
    truncate_str(hints.trim(), width)
}

/// Calculate centered rectangle for popups
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let popup_width = (outer.width * percent_x / 100).max(20).min(outer.width.saturating_sub(4));
    let popup_height = (outer.height * percent_y / 100).max(5).min(outer.height.saturating_sub(4));
    let popup_x = (outer.width.saturating_sub(popup_width)) / 2;
    let popup_y = (outer.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}
