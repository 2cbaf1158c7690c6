pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod history;
pub mod logging;
pub mod portfolio;
pub mod resume;
pub mod sound;
pub mod splash;
pub mod transcript;
pub mod tui;
pub mod typewriter;

mod tui_draw;
mod tui_events;
mod tui_types;
mod tui_utils;

#[cfg(test)]
pub mod test_helpers;
