//! Output blocks and footer hints as ratatui lines.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::dispatch::{CommandOutput, ResumePreview};
use super::registry::CommandSpec;
use super::shortcuts::Shortcut;
use super::types::CommandContext;
use crate::portfolio::{ContactInfo, Job, Project, SkillGroup};

const LS_COLUMNS: usize = 3;

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::Cyan))
}

fn body(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::Gray))
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

/// Banner shown on a fresh or cleared terminal.
pub fn welcome_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Welcome to my Terminal Portfolio!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            body("Type "),
            Span::styled(
                "help",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            body(" to see available commands."),
        ]),
        Line::from(""),
    ]
}

/// Render a command's output. `reveal` replaces the `about` text while the
/// typewriter is still running.
pub fn render_output(output: &CommandOutput, reveal: Option<&str>) -> Vec<Line<'static>> {
    match output {
        CommandOutput::Help(specs) => render_help(specs),
        CommandOutput::About { text } => render_about(reveal.unwrap_or(text)),
        CommandOutput::Skills(groups) => render_skills(groups),
        CommandOutput::Projects(projects) => render_projects(projects),
        CommandOutput::Experience(jobs) => render_experience(jobs),
        CommandOutput::Contact(contact) => render_contact(contact),
        CommandOutput::Resume(preview) => render_resume(preview),
        CommandOutput::Whoami { title, tagline } => vec![
            heading("Current User:"),
            Line::from(Span::raw(title.clone())),
            Line::from(muted(tagline.clone())),
        ],
        CommandOutput::Date(text) => vec![Line::from(body(text.clone()))],
        CommandOutput::Ls(specs) => render_ls(specs),
        CommandOutput::Unknown(err) => vec![Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))],
    }
}

fn render_help(specs: &[CommandSpec]) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Available commands:")];
    for spec in specs {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", spec.name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            body(spec.description),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(heading("Shortcuts:"));
    lines.extend(shortcut_help_lines(CommandContext::Prompt));
    lines
}

fn render_about(text: &str) -> Vec<Line<'static>> {
    text.lines().map(|line| Line::from(body(line.to_string()))).collect()
}

fn render_skills(groups: &[SkillGroup]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(heading(format!("{}:", group.category)));

        let mut spans = vec![Span::raw("  ")];
        for item in &group.items {
            spans.push(Span::styled(
                format!(" {} ", item),
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn render_projects(projects: &[Project]) -> Vec<Line<'static>> {
    let bar = || Span::styled("\u{2502} ", Style::default().fg(Color::Green));
    let mut lines = Vec::new();
    for (i, project) in projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }

        let mut title = vec![
            bar(),
            Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if project.featured {
            title.push(Span::styled(
                "  \u{2605} Featured",
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(vec![bar(), body(project.description.clone())]));
        lines.push(Line::from(vec![
            bar(),
            label("Tech Stack: "),
            body(project.tech_stack.join(", ")),
        ]));

        let mut links = vec![bar()];
        if let Some(ref url) = project.github_url {
            links.push(label("GitHub: "));
            links.push(Span::styled(
                url.clone(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ));
            links.push(Span::raw("  "));
        }
        if let Some(ref url) = project.live_url {
            links.push(label("Live Demo: "));
            links.push(Span::styled(
                url.clone(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ));
        }
        if links.len() > 1 {
            lines.push(Line::from(links));
        }
    }
    lines
}

fn render_experience(jobs: &[Job]) -> Vec<Line<'static>> {
    let bar = || Span::styled("\u{2502} ", Style::default().fg(Color::Green));
    let mut lines = Vec::new();
    for (i, job) in jobs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            bar(),
            Span::styled(
                job.position.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let mut company = vec![
            bar(),
            label(job.company.clone()),
            muted(format!("  {} - {}", job.start_date, job.end_date)),
        ];
        if job.current {
            company.push(Span::styled(
                "  \u{2022} Current",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(company));
        lines.push(Line::from(vec![bar(), body(job.location.clone())]));
        lines.push(Line::from(vec![bar(), label("Key Responsibilities:")]));
        for item in &job.description {
            lines.push(Line::from(vec![
                bar(),
                Span::styled("  \u{2022} ", Style::default().fg(Color::Green)),
                body(item.clone()),
            ]));
        }
        lines.push(Line::from(vec![
            bar(),
            label("Technologies: "),
            muted(job.technologies.join(", ")),
        ]));
    }
    lines
}

fn render_contact(contact: &ContactInfo) -> Vec<Line<'static>> {
    let row = |name: &str, value: &str| {
        Line::from(vec![
            label(format!("  {:<10}", format!("{}:", name))),
            Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ])
    };

    let mut lines = vec![
        heading("Get in touch:"),
        row("Email", &contact.email),
        row("GitHub", &contact.github),
        row("LinkedIn", &contact.linkedin),
    ];
    if let Some(ref twitter) = contact.twitter {
        lines.push(row("Twitter", twitter));
    }
    lines
}

fn render_resume(preview: &ResumePreview) -> Vec<Line<'static>> {
    let row = |name: &str, value: &str| {
        Line::from(vec![
            Span::styled(
                format!("  {} ", name),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            body(value.to_string()),
        ])
    };
    let format = if preview.has_pdf { "PDF" } else { "plain text" };

    vec![
        heading("Resume Preview"),
        row("Name:", &preview.name),
        row("Title:", &preview.title),
        row("Experience:", &preview.years_experience),
        row("Skills:", &preview.skills_summary),
        Line::from(""),
        Line::from(vec![
            label("Download Resume"),
            muted(format!(" ({}) - press Enter in the dialog", format)),
        ]),
    ]
}

fn render_ls(specs: &[CommandSpec]) -> Vec<Line<'static>> {
    specs
        .chunks(LS_COLUMNS)
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|spec| {
                    Span::styled(
                        format!("{:<14}", spec.name),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Shortcut rows for a context, as shown under help.
pub fn shortcut_help_lines(context: CommandContext) -> Vec<Line<'static>> {
    Shortcut::for_context(context)
        .into_iter()
        .map(|shortcut| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<12}", shortcut.key_display()),
                    Style::default().fg(Color::Cyan),
                ),
                body(shortcut.description()),
            ])
        })
        .collect()
}

/// Shortcuts to display in the footer for a given context.
fn footer_shortcuts(context: CommandContext) -> &'static [Shortcut] {
    match context {
        CommandContext::Prompt | CommandContext::Global => &[
            Shortcut::HistoryPrevious,
            Shortcut::OpenSuggestions,
            Shortcut::CloseSuggestions,
            Shortcut::ToggleSound,
        ],
        CommandContext::Suggestions => &[
            Shortcut::SuggestionPrevious,
            Shortcut::AcceptSuggestion,
            Shortcut::CloseSuggestions,
        ],
        CommandContext::ResumeDialog => &[
            Shortcut::DownloadResume,
            Shortcut::OpenResume,
            Shortcut::CloseDialog,
        ],
        CommandContext::Splash => &[Shortcut::SkipSplash],
    }
}

fn footer_key(shortcut: Shortcut) -> &'static str {
    match shortcut {
        Shortcut::HistoryPrevious | Shortcut::SuggestionPrevious => "\u{2191}/\u{2193}",
        other => other.key_display(),
    }
}

/// Footer hint string, e.g. ` ↑/↓ history │ Tab autocomplete │ ... `
pub fn format_footer_hints(context: CommandContext) -> String {
    let hints: Vec<String> = footer_shortcuts(context)
        .iter()
        .map(|s| format!("{} {}", footer_key(*s), s.short_desc()))
        .collect();
    format!(" {} ", hints.join(" \u{2502} "))
}
