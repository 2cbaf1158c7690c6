//! Prefix autocomplete over the command registry.

use crate::commands::{CommandRegistry, CommandSpec};

/// Suggestion list state. Matches are recomputed on every input change;
/// the selection wraps in both directions.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    matches: Vec<CommandSpec>,
    selected: usize,
    open: bool,
    input_blank: bool,
}

impl Autocomplete {
    pub fn new(registry: &CommandRegistry) -> Self {
        Self {
            matches: registry.specs().to_vec(),
            selected: 0,
            open: false,
            input_blank: true,
        }
    }

    /// Recompute matches for the current input and reset the selection.
    pub fn update(&mut self, registry: &CommandRegistry, input: &str) {
        self.matches = registry.filter_prefix(input);
        self.input_blank = input.trim().is_empty();
        self.selected = 0;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Shown only while open, with non-blank input and at least one match.
    pub fn is_visible(&self) -> bool {
        self.open && !self.input_blank && !self.matches.is_empty()
    }

    pub fn matches(&self) -> &[CommandSpec] {
        &self.matches
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 < self.matches.len() {
            self.selected + 1
        } else {
            0
        };
    }

    pub fn previous(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            self.matches.len() - 1
        };
    }

    pub fn highlighted(&self) -> Option<&CommandSpec> {
        self.matches.get(self.selected)
    }

    /// Take the highlighted command name and close the list.
    pub fn select(&mut self) -> Option<&'static str> {
        let name = self.highlighted().map(|spec| spec.name);
        if name.is_some() {
            self.open = false;
        }
        name
    }

    /// Close the list. The empty string signals "leave the input as it is".
    pub fn cancel(&mut self) -> &'static str {
        self.open = false;
        ""
    }
}
