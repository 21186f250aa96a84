//! Output Log Entry Model
//!
//! One rendered unit of the output log: either the echo of a submitted line
//! or a response to it. Entries are immutable once appended.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::ContentBlock;

/// What an entry shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// The prompt and the line the user submitted
    Echo { prompt: String, input: String },
    /// A content block, optionally under a section title (`ls -la`)
    Content {
        title: Option<String>,
        block: ContentBlock,
    },
    /// A user-visible error message
    Error(String),
    /// Completion candidates for an ambiguous prefix
    Candidates(Vec<String>),
}

/// A single entry of the output log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// When the entry was appended (in local time)
    pub timestamp: DateTime<Local>,

    pub kind: EntryKind,
}

impl OutputEntry {
    /// Create a new entry
    pub fn new(kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Local::now(),
            kind,
        }
    }

    pub fn echo(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(EntryKind::Echo {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn content(block: ContentBlock) -> Self {
        Self::new(EntryKind::Content { title: None, block })
    }

    pub fn section(title: impl Into<String>, block: ContentBlock) -> Self {
        Self::new(EntryKind::Content {
            title: Some(title.into()),
            block,
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(EntryKind::Error(message.into()))
    }

    pub fn candidates(names: Vec<String>) -> Self {
        Self::new(EntryKind::Candidates(names))
    }

    pub fn is_echo(&self) -> bool {
        matches!(self.kind, EntryKind::Echo { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, EntryKind::Error(_))
    }

    /// Plain text rendering, used for logs and tests
    pub fn plain_text(&self) -> String {
        match &self.kind {
            EntryKind::Echo { prompt, input } => format!("{} {}", prompt, input),
            EntryKind::Content { title: Some(title), block } => {
                format!("{}\n{}", title, block.plain_text())
            }
            EntryKind::Content { title: None, block } => block.plain_text(),
            EntryKind::Error(message) => message.clone(),
            EntryKind::Candidates(names) => names.join(" "),
        }
    }
}
