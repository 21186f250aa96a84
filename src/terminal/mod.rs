//! Terminal Core
//!
//! [`Terminal`] owns the output log, the command history and the completion
//! table, and turns one submitted line into log entries. Work that leaves
//! the process (saving the CV, fetching hiscores) is not done here: the
//! caller gets a [`Submission`] describing what to run, and reports stats
//! back through [`Terminal::complete_stats`].
//!
//! `clear` and `ls -la` start a new log generation. A lookup started before
//! that is stale: its result is dropped instead of landing under no echo.

pub mod output;
pub mod welcome;

pub use output::OutputLog;
pub use welcome::{TyperState, WelcomeTyper};

use tracing::{debug, info, warn};

use crate::commands::{classify, Classification, EchoCommand, UtilityCommand};
use crate::completion::{CompletionProvider, CompletionResult};
use crate::config::TerminalConfig;
use crate::content::ContentRegistry;
use crate::history::HistoryBuffer;
use crate::models::{OutputEntry, StatRecord};
use crate::stats::StatsError;

/// Message shown when the hiscore lookup could not reach the service
pub const STATS_FETCH_FAILED: &str = "Failed to fetch OSRS stats. Please try again later.";

/// Ticket for one hiscore lookup, handed back to [`Terminal::complete_stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRequest {
    generation: u64,
}

/// What the caller has to do after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Entries were appended; nothing else to do
    Rendered,
    /// The log was emptied
    Cleared,
    /// The log was replaced with every content section
    ListedAll,
    /// Save the CV to the download directory
    DownloadCv,
    /// Run the hiscore lookup, then call [`Terminal::complete_stats`]
    FetchStats(StatsRequest),
}

/// Interactive portfolio terminal
#[derive(Debug, Clone)]
pub struct Terminal {
    prompt: String,
    output: OutputLog,
    history: HistoryBuffer,
    completion: CompletionProvider,
    registry: ContentRegistry,
    /// Bumped whenever the log is cleared or replaced
    generation: u64,
    /// Lookups of the current generation not yet completed
    pending_stats: usize,
}

impl Terminal {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_registry(prompt, ContentRegistry::new())
    }

    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(config.prompt.clone())
    }

    /// Terminal rendering content for a fixed registry (and so a fixed date)
    pub fn with_registry(prompt: impl Into<String>, registry: ContentRegistry) -> Self {
        Self {
            prompt: prompt.into(),
            output: OutputLog::new(),
            history: HistoryBuffer::new(),
            completion: CompletionProvider::new(),
            registry,
            generation: 0,
            pending_stats: 0,
        }
    }

    /// Process one submitted line
    ///
    /// A blank line is an unknown command like any other, but is not
    /// recorded in history.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let input = raw.trim();
        self.history.push(input);
        let echo = OutputEntry::echo(&self.prompt, input);

        match classify(input) {
            Classification::Invalid(command) => {
                debug!("Unknown command: {}", command);
                self.output.push(echo);
                self.output
                    .push(OutputEntry::error(format!("command not found: {}", command)));
                Submission::Rendered
            }
            Classification::Echo(EchoCommand::Runescape) => {
                self.output.push(echo);
                self.pending_stats += 1;
                Submission::FetchStats(StatsRequest {
                    generation: self.generation,
                })
            }
            Classification::Echo(command) => {
                self.output.push(echo);
                self.output
                    .push(OutputEntry::content(self.registry.block(command)));
                Submission::Rendered
            }
            Classification::Utility(UtilityCommand::Clear) => {
                self.output.clear();
                self.next_generation();
                Submission::Cleared
            }
            Classification::Utility(UtilityCommand::ListAll) => {
                let mut entries = Vec::with_capacity(EchoCommand::LISTING_ORDER.len() + 1);
                entries.push(echo);
                entries.extend(
                    EchoCommand::LISTING_ORDER
                        .iter()
                        .map(|cmd| OutputEntry::section(cmd.name(), self.registry.block(*cmd))),
                );
                self.output.replace(entries);
                self.next_generation();
                Submission::ListedAll
            }
            Classification::Utility(UtilityCommand::Cv) => {
                self.output.push(echo);
                Submission::DownloadCv
            }
        }
    }

    fn next_generation(&mut self) {
        self.generation += 1;
        self.pending_stats = 0;
    }

    /// Append the outcome of a hiscore lookup started by [`Submission::FetchStats`]
    ///
    /// Results for a log that has since been cleared or replaced are dropped.
    pub fn complete_stats(
        &mut self,
        request: StatsRequest,
        result: Result<Vec<StatRecord>, StatsError>,
    ) {
        if request.generation != self.generation {
            debug!(
                "Dropping stats from generation {} (log is at {})",
                request.generation, self.generation
            );
            return;
        }

        self.pending_stats = self.pending_stats.saturating_sub(1);
        match result {
            Ok(stats) => {
                info!("Rendering {} skills", stats.len());
                self.output
                    .push(OutputEntry::content(self.registry.runescape(&stats)));
            }
            Err(StatsError::Fetch(e)) => {
                warn!("Stats lookup failed: {}", e);
                self.output.push(OutputEntry::error(STATS_FETCH_FAILED));
            }
            Err(StatsError::Parse(e)) => {
                warn!("Stats payload unusable: {}", e);
                self.output.push(OutputEntry::error(e.to_string()));
            }
        }
    }

    /// Whether a hiscore lookup is still outstanding
    pub fn stats_pending(&self) -> bool {
        self.pending_stats > 0
    }

    /// ArrowUp: the previous history entry
    pub fn recall_previous(&mut self) -> String {
        self.history.recall_previous().to_string()
    }

    /// ArrowDown: the next history entry, or `""` past the newest
    pub fn recall_next(&mut self) -> String {
        self.history.recall_next().to_string()
    }

    /// Tab: complete `input` against the command set
    ///
    /// Returns the new input line. A unique match replaces the input;
    /// several matches leave it unchanged and list the candidates in the log;
    /// no match changes nothing.
    pub fn autocomplete(&mut self, input: &str) -> String {
        match self.completion.complete(input) {
            CompletionResult::Unique(name) => name.to_string(),
            CompletionResult::Ambiguous(names) => {
                self.output.push(OutputEntry::echo(&self.prompt, input));
                self.output.push(OutputEntry::candidates(
                    names.into_iter().map(str::to_string).collect(),
                ));
                input.to_string()
            }
            CompletionResult::NoMatch => input.to_string(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }
}
