//! Scrollback log of submitted commands and their outputs.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::commands::CommandOutput;

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub input: String,
    /// Attached once the simulated processing delay has elapsed
    pub output: Option<CommandOutput>,
    pub created_at: DateTime<Local>,
    pub collapsed: bool,
}

#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending entry for `input` and return its id.
    pub fn push(&mut self, input: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(TranscriptEntry {
            id,
            input: input.trim().to_string(),
            output: None,
            created_at: Local::now(),
            collapsed: false,
        });
        id
    }

    /// Attach output to a pending entry. Returns false if the entry is gone
    /// (e.g. the transcript was cleared) or already has output.
    pub fn attach_output(&mut self, id: Uuid, output: CommandOutput) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) if entry.output.is_none() => {
                entry.output = Some(output);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Collapse or expand an entry's output. Entries without output are left alone.
    pub fn toggle_collapsed(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) if entry.output.is_some() => {
                entry.collapsed = !entry.collapsed;
                true
            }
            _ => false,
        }
    }

    /// Most recent entry that has output.
    pub fn latest_with_output(&self) -> Option<&TranscriptEntry> {
        self.entries.iter().rev().find(|e| e.output.is_some())
    }

    pub fn get(&self, id: Uuid) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::UnknownCommand;

    fn unknown(input: &str) -> CommandOutput {
        CommandOutput::Unknown(UnknownCommand {
            input: input.to_string(),
        })
    }

    #[test]
    fn entries_keep_submission_order() {
        let mut transcript = Transcript::new();
        transcript.push("help");
        transcript.push(" about ");
        transcript.push("skills");
        let inputs: Vec<_> = transcript.entries().iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["help", "about", "skills"]);
    }

    #[test]
    fn output_attaches_once() {
        let mut transcript = Transcript::new();
        let id = transcript.push("foo");
        assert!(transcript.attach_output(id, unknown("foo")));
        assert!(!transcript.attach_output(id, unknown("bar")));
        assert_eq!(transcript.get(id).unwrap().output, Some(unknown("foo")));
    }

    #[test]
    fn attach_after_clear_is_dropped() {
        let mut transcript = Transcript::new();
        let id = transcript.push("foo");
        transcript.clear();
        assert!(!transcript.attach_output(id, unknown("foo")));
        assert!(transcript.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut transcript = Transcript::new();
        let a = transcript.push("x");
        let b = transcript.push("x");
        assert_ne!(a, b);
    }

    #[test]
    fn toggle_collapsed_requires_output() {
        let mut transcript = Transcript::new();
        let id = transcript.push("foo");
        assert!(!transcript.toggle_collapsed(id));
        transcript.attach_output(id, unknown("foo"));
        assert!(transcript.toggle_collapsed(id));
        assert!(transcript.get(id).unwrap().collapsed);
        assert!(transcript.toggle_collapsed(id));
        assert!(!transcript.get(id).unwrap().collapsed);
    }

    #[test]
    fn latest_with_output_skips_pending() {
        let mut transcript = Transcript::new();
        let first = transcript.push("a");
        transcript.attach_output(first, unknown("a"));
        transcript.push("b");
        assert_eq!(transcript.latest_with_output().map(|e| e.id), Some(first));
    }
}
