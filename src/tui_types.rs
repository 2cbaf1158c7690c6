//! TUI type definitions.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::commands::CommandOutput;
use crate::config::Config;
use crate::resume;
use crate::typewriter::Typewriter;

/// View state for the TUI
#[derive(Debug, Clone, PartialEq)]
pub enum TuiView {
    Prompt,
    /// Opened by `resume`
    ResumeDialog {
        /// Path of the last successful export
        exported: Option<PathBuf>,
    },
}

/// A submitted command waiting out the processing delay.
#[derive(Debug, Clone)]
pub struct PendingCommand {
    pub id: Uuid,
    pub output: CommandOutput,
    pub due: Instant,
}

/// Typewriter reveal bound to a transcript entry.
#[derive(Debug, Clone)]
pub struct Reveal {
    pub id: Uuid,
    pub typewriter: Typewriter,
}

/// Runtime knobs resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct TerminalSettings {
    pub command_delay: Duration,
    pub typing_speed: Duration,
    pub download_dir: PathBuf,
}

impl TerminalSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            command_delay: Duration::from_millis(config.command_delay_ms),
            typing_speed: Duration::from_millis(config.typing_speed_ms),
            download_dir: resume::download_dir(config),
        }
    }
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
