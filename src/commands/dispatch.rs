//! Input normalization and command lookup.

use chrono::{DateTime, TimeZone};
use thiserror::Error;

use super::registry::{Command, CommandSpec};
use crate::portfolio::{ContactInfo, Job, Portfolio, Project, SkillGroup};

/// The only user-facing failure: input that names no command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Command not found: \"{input}\". Type 'help' to see available commands.")]
pub struct UnknownCommand {
    /// Trimmed input, original letter case
    pub input: String,
}

/// Preview shown by `resume` before the export dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumePreview {
    pub name: String,
    pub title: String,
    pub years_experience: String,
    pub skills_summary: String,
    pub has_pdf: bool,
}

/// Rendered content of one transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Help(Vec<CommandSpec>),
    About { text: String },
    Skills(Vec<SkillGroup>),
    Projects(Vec<Project>),
    Experience(Vec<Job>),
    Contact(ContactInfo),
    Resume(ResumePreview),
    Whoami { title: String, tagline: String },
    Date(String),
    Ls(Vec<CommandSpec>),
    Unknown(UnknownCommand),
}

impl CommandOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, CommandOutput::Unknown(_))
    }
}

/// Result of dispatching one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Blank input: nothing happens
    Ignored,
    /// Wipe the transcript and show the welcome banner again
    Clear,
    Output(CommandOutput),
}

/// Format a timestamp the way the `date` command prints it,
/// e.g. `Monday, October 19, 2026 at 02:30:45 PM +00:00`.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%A, %B %-d, %Y at %I:%M:%S %p %Z").to_string()
}

/// Map raw input to its output. Pure apart from reading `now` for `date`.
pub fn dispatch<Tz: TimeZone>(input: &str, portfolio: &Portfolio, now: &DateTime<Tz>) -> Dispatch
where
    Tz::Offset: std::fmt::Display,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Dispatch::Ignored;
    }

    let Some(command) = Command::parse(trimmed) else {
        return Dispatch::Output(CommandOutput::Unknown(UnknownCommand {
            input: trimmed.to_string(),
        }));
    };

    let output = match command {
        Command::Clear => return Dispatch::Clear,
        Command::Help => CommandOutput::Help(Command::all().iter().map(Command::spec).collect()),
        Command::Ls => CommandOutput::Ls(Command::all().iter().map(Command::spec).collect()),
        Command::About => CommandOutput::About {
            text: portfolio.about.trim().to_string(),
        },
        Command::Skills => CommandOutput::Skills(portfolio.skills.clone()),
        Command::Projects => CommandOutput::Projects(portfolio.projects.clone()),
        Command::Experience => CommandOutput::Experience(portfolio.experience.clone()),
        Command::Contact => CommandOutput::Contact(portfolio.contact.clone()),
        Command::Resume => CommandOutput::Resume(ResumePreview {
            name: portfolio.profile.name.clone(),
            title: portfolio.profile.title.clone(),
            years_experience: portfolio.resume.years_experience.clone(),
            skills_summary: portfolio.resume.skills_summary.clone(),
            has_pdf: portfolio.resume.pdf_path.is_some(),
        }),
        Command::Whoami => CommandOutput::Whoami {
            title: portfolio.profile.title.clone(),
            tagline: portfolio.profile.tagline.clone(),
        },
        Command::Date => CommandOutput::Date(format_date(now)),
    };

    Dispatch::Output(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 15, 6, 7).unwrap()
    }

    fn run(input: &str) -> Dispatch {
        dispatch(input, &Portfolio::default(), &fixed_now())
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(run(""), Dispatch::Ignored);
        assert_eq!(run("   \t "), Dispatch::Ignored);
    }

    #[test]
    fn every_command_dispatches_in_any_case() {
        for cmd in Command::all() {
            let input = format!("  {}  ", cmd.name().to_uppercase());
            match run(&input) {
                Dispatch::Clear => assert_eq!(*cmd, Command::Clear),
                Dispatch::Output(output) => assert!(!output.is_error(), "{} hit the error path", cmd.name()),
                Dispatch::Ignored => panic!("{} was ignored", cmd.name()),
            }
        }
    }

    #[test]
    fn unknown_command_quotes_input() {
        let Dispatch::Output(CommandOutput::Unknown(err)) = run("  foo ") else {
            panic!("expected unknown command");
        };
        assert_eq!(err.input, "foo");
        let message = err.to_string();
        assert!(message.contains("\"foo\""));
        assert!(message.contains("help"));
    }

    #[test]
    fn unknown_command_keeps_letter_case() {
        let Dispatch::Output(CommandOutput::Unknown(err)) = run("Sudo Rm") else {
            panic!("expected unknown command");
        };
        assert_eq!(err.input, "Sudo Rm");
    }

    #[test]
    fn clear_is_its_own_outcome() {
        assert_eq!(run("Clear"), Dispatch::Clear);
    }

    #[test]
    fn help_lists_registry_in_order() {
        let Dispatch::Output(CommandOutput::Help(specs)) = run("help") else {
            panic!("expected help output");
        };
        assert_eq!(specs.len(), 11);
        assert_eq!(specs[0].name, "help");
        assert_eq!(specs[10].name, "ls");
    }

    #[test]
    fn date_uses_supplied_clock() {
        let Dispatch::Output(CommandOutput::Date(text)) = run("date") else {
            panic!("expected date output");
        };
        assert_eq!(text, "Monday, March 4, 2024 at 03:06:07 PM UTC");
    }

    #[test]
    fn whoami_reads_profile() {
        let Dispatch::Output(CommandOutput::Whoami { title, tagline }) = run("whoami") else {
            panic!("expected whoami output");
        };
        assert_eq!(title, "Full-Stack Developer");
        assert!(tagline.contains("digital experiences"));
    }

    #[test]
    fn resume_preview_reports_pdf_availability() {
        let mut portfolio = Portfolio::default();
        portfolio.resume.pdf_path = Some("/tmp/cv.pdf".into());
        let Dispatch::Output(CommandOutput::Resume(preview)) =
            dispatch("resume", &portfolio, &fixed_now())
        else {
            panic!("expected resume output");
        };
        assert!(preview.has_pdf);
        assert_eq!(preview.name, portfolio.profile.name);
    }
}
