//! Command Completion
//!
//! Tab completion over the fixed command set. Matching is a literal,
//! case-sensitive prefix test; there is no fuzzy matching.

use crate::commands::Command;

/// Completion provider for portfolio commands
#[derive(Debug, Clone)]
pub struct CompletionProvider {
    /// Command names, sorted ascending
    command_table: Vec<&'static str>,
}

/// Outcome of completing a partial input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// Exactly one command matched
    Unique(&'static str),
    /// Several commands matched, in table order
    Ambiguous(Vec<&'static str>),
    /// Nothing matched
    NoMatch,
}

impl CompletionProvider {
    /// Create a provider over every known command
    pub fn new() -> Self {
        let mut command_table: Vec<&'static str> =
            Command::ALL.iter().map(|cmd| cmd.name()).collect();
        command_table.sort_unstable();
        Self { command_table }
    }

    /// Names in the order candidates are reported
    pub fn commands(&self) -> &[&'static str] {
        &self.command_table
    }

    /// All command names starting with `prefix`
    pub fn candidates(&self, prefix: &str) -> Vec<&'static str> {
        self.command_table
            .iter()
            .copied()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    /// Complete a partial input
    pub fn complete(&self, prefix: &str) -> CompletionResult {
        let mut candidates = self.candidates(prefix);
        match candidates.len() {
            0 => CompletionResult::NoMatch,
            1 => CompletionResult::Unique(candidates.remove(0)),
            _ => CompletionResult::Ambiguous(candidates),
        }
    }
}

impl Default for CompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionResult {
    /// Check if there are any suggestions
    pub fn is_empty(&self) -> bool {
        matches!(self, CompletionResult::NoMatch)
    }

    /// Candidates joined the way the log shows them
    pub fn listing(&self) -> String {
        match self {
            CompletionResult::Unique(name) => name.to_string(),
            CompletionResult::Ambiguous(names) => names.join(" "),
            CompletionResult::NoMatch => String::new(),
        }
    }
}
