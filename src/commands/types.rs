//! Command system types.

/// The view/context where a shortcut is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandContext {
    /// Available everywhere
    Global,
    /// Typing at the prompt
    Prompt,
    /// Suggestion popup is open
    Suggestions,
    /// Resume download dialog
    ResumeDialog,
    /// Loading splash screen
    Splash,
}
