//! Output Log
//!
//! Ordered record of everything the terminal has printed. Entries are only
//! ever appended; the log as a whole can be cleared or replaced.

use crate::models::OutputEntry;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    entries: Vec<OutputEntry>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: OutputEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = OutputEntry>) {
        self.entries.extend(entries);
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        debug!("Clearing {} output entries", self.entries.len());
        self.entries.clear();
    }

    /// Swap the whole log for `entries`
    pub fn replace(&mut self, entries: Vec<OutputEntry>) {
        debug!(
            "Replacing {} output entries with {}",
            self.entries.len(),
            entries.len()
        );
        self.entries = entries;
    }

    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&OutputEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputEntry> {
        self.entries.iter()
    }

    /// Whole log as plain text, one entry per paragraph
    pub fn plain_text(&self) -> String {
        self.entries
            .iter()
            .map(OutputEntry::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a OutputLog {
    type Item = &'a OutputEntry;
    type IntoIter = std::slice::Iter<'a, OutputEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
