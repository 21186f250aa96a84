//! Command history with arrow-key recall
//!
//! History is append-only. A cursor walks it for ArrowUp/ArrowDown recall;
//! the cursor position `len()` stands for the empty line being typed.

use tracing::debug;

/// Submitted commands plus a recall cursor
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    /// Entries in submission order
    entries: Vec<String>,
    /// Recall position in `0..=entries.len()`
    cursor: usize,
}

impl HistoryBuffer {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command
    ///
    /// Blank commands are ignored and leave the cursor where it is. After a
    /// real append the cursor moves past the end, so the next recall starts
    /// from the newest entry.
    pub fn push(&mut self, command: &str) {
        let command = command.trim();
        if command.is_empty() {
            return;
        }
        self.entries.push(command.to_string());
        self.cursor = self.entries.len();
        debug!("History entry #{} added", self.entries.len());
    }

    /// Step back one entry (ArrowUp)
    pub fn recall_previous(&mut self) -> &str {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Step forward one entry (ArrowDown)
    pub fn recall_next(&mut self) -> &str {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Entry under the cursor, or `""` past the end
    pub fn current(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
