//! Keyboard shortcuts definitions.

use super::types::CommandContext;

/// All keyboard shortcuts in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    // Prompt
    Submit,
    HistoryPrevious,
    HistoryNext,
    OpenSuggestions,
    ScrollUp,
    ScrollDown,
    CollapseOutput,
    ToggleSound,
    Quit,

    // Suggestions
    SuggestionPrevious,
    SuggestionNext,
    AcceptSuggestion,
    CloseSuggestions,

    // Resume dialog
    DownloadResume,
    OpenResume,
    CloseDialog,

    // Splash
    SkipSplash,
}

impl Shortcut {
    /// All shortcuts.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Submit,
            Self::HistoryPrevious,
            Self::HistoryNext,
            Self::OpenSuggestions,
            Self::ScrollUp,
            Self::ScrollDown,
            Self::CollapseOutput,
            Self::ToggleSound,
            Self::Quit,
            Self::SuggestionPrevious,
            Self::SuggestionNext,
            Self::AcceptSuggestion,
            Self::CloseSuggestions,
            Self::DownloadResume,
            Self::OpenResume,
            Self::CloseDialog,
            Self::SkipSplash,
        ]
    }

    /// Human-readable key representation for help display.
    pub fn key_display(&self) -> &'static str {
        match self {
            Self::Submit => "Enter",
            Self::HistoryPrevious => "\u{2191}",
            Self::HistoryNext => "\u{2193}",
            Self::OpenSuggestions => "Tab",
            Self::ScrollUp => "PgUp",
            Self::ScrollDown => "PgDn",
            Self::CollapseOutput => "Ctrl+O",
            Self::ToggleSound => "Ctrl+S",
            Self::Quit => "Ctrl+C",
            Self::SuggestionPrevious => "\u{2191}",
            Self::SuggestionNext => "\u{2193}",
            Self::AcceptSuggestion => "Enter",
            Self::CloseSuggestions => "Esc",
            Self::DownloadResume => "Enter",
            Self::OpenResume => "o",
            Self::CloseDialog => "Esc",
            Self::SkipSplash => "Enter/Esc",
        }
    }

    /// Description for help text.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Submit => "Run the command",
            Self::HistoryPrevious => "Previous command",
            Self::HistoryNext => "Next command",
            Self::OpenSuggestions => "Show command suggestions",
            Self::ScrollUp => "Scroll output up",
            Self::ScrollDown => "Scroll output down",
            Self::CollapseOutput => "Collapse / expand latest output",
            Self::ToggleSound => "Toggle sound",
            Self::Quit => "Quit",
            Self::SuggestionPrevious => "Previous suggestion",
            Self::SuggestionNext => "Next suggestion",
            Self::AcceptSuggestion => "Use suggestion",
            Self::CloseSuggestions => "Close suggestions",
            Self::DownloadResume => "Download resume",
            Self::OpenResume => "Open downloaded file",
            Self::CloseDialog => "Close dialog",
            Self::SkipSplash => "Skip loading screen",
        }
    }

    /// Short description for the footer.
    pub fn short_desc(&self) -> &'static str {
        match self {
            Self::HistoryPrevious | Self::HistoryNext => "history",
            Self::OpenSuggestions => "autocomplete",
            Self::CloseSuggestions | Self::CloseDialog => "close",
            Self::SuggestionPrevious | Self::SuggestionNext => "navigate",
            Self::AcceptSuggestion => "select",
            Self::ToggleSound => "sound",
            Self::DownloadResume => "download",
            Self::OpenResume => "open",
            Self::Quit => "quit",
            Self::SkipSplash => "skip",
            _ => self.description(),
        }
    }

    /// Contexts where this shortcut is available.
    pub fn contexts(&self) -> &'static [CommandContext] {
        match self {
            Self::Submit
            | Self::HistoryPrevious
            | Self::HistoryNext
            | Self::OpenSuggestions
            | Self::ScrollUp
            | Self::ScrollDown
            | Self::CollapseOutput => &[CommandContext::Prompt],

            Self::ToggleSound | Self::Quit => &[CommandContext::Global],

            Self::SuggestionPrevious
            | Self::SuggestionNext
            | Self::AcceptSuggestion
            | Self::CloseSuggestions => &[CommandContext::Suggestions],

            Self::DownloadResume | Self::OpenResume | Self::CloseDialog => {
                &[CommandContext::ResumeDialog]
            }

            Self::SkipSplash => &[CommandContext::Splash],
        }
    }

    /// Shortcuts available in a given context, including global ones.
    pub fn for_context(context: CommandContext) -> Vec<Self> {
        Self::all()
            .into_iter()
            .filter(|s| {
                s.contexts().contains(&context) || s.contexts().contains(&CommandContext::Global)
            })
            .collect()
    }
}
