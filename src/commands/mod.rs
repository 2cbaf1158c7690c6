//! Centralized command system.
//!
//! This module is the single source of truth for the portfolio commands and
//! the keyboard shortcuts. Help, `ls`, autocomplete and the footer hints are
//! all generated from it.
//!
//! # Architecture
//!
//! - `types`: Context enum for shortcut availability
//! - `registry`: The ordered command registry
//! - `shortcuts`: Keyboard shortcut definitions
//! - `dispatch`: Input normalization and command lookup
//! - `render`: Output blocks and footer hints as ratatui lines

mod dispatch;
mod registry;
mod render;
mod shortcuts;
mod types;

pub use dispatch::{dispatch, format_date, CommandOutput, Dispatch, ResumePreview, UnknownCommand};
pub use registry::{Command, CommandRegistry, CommandSpec};
pub use render::{format_footer_hints, render_output, shortcut_help_lines, welcome_lines};
pub use shortcuts::Shortcut;
pub use types::CommandContext;
