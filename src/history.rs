//! Command history with a browse cursor.
//!
//! Recall clamps at the oldest entry; stepping forward past the newest entry
//! leaves browse mode and yields an empty line.

#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    /// `None` while not browsing
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are not recorded; browsing stops either way.
    pub fn submit(&mut self, input: &str) {
        self.cursor = None;
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            self.entries.push(trimmed.to_string());
        }
    }

    /// Step toward the oldest entry. Starts at the newest when not browsing.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(&self.entries[index])
    }

    /// Step toward the newest entry. Past the newest, browsing ends and `""` is returned.
    pub fn recall_next(&mut self) -> Option<&str> {
        let current = self.cursor?;
        let index = current + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            Some("")
        } else {
            self.cursor = Some(index);
            Some(&self.entries[index])
        }
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
