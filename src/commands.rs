//! Command classification
//!
//! The portfolio understands a closed set of commands. Echo commands only
//! display a content block; utility commands have a side effect on the
//! output log or outside the window. Anything else is invalid.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Commands whose only effect is displaying content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EchoCommand {
    Help,
    Whoami,
    Projects,
    Homelab,
    Contact,
    Github,
    Skills,
    Experience,
    Runescape,
}

/// Commands with a side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilityCommand {
    /// Empty the output log
    Clear,
    /// Replace the log with every content block (`ls -la`)
    ListAll,
    /// Save the CV to the download directory
    Cv,
}

/// Any known command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Echo(EchoCommand),
    Utility(UtilityCommand),
}

/// Result of classifying one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Echo(EchoCommand),
    Utility(UtilityCommand),
    /// Unknown command, carrying the normalized input
    Invalid(String),
}

impl EchoCommand {
    /// All echo commands in declaration order
    pub const ALL: [EchoCommand; 9] = [
        EchoCommand::Help,
        EchoCommand::Whoami,
        EchoCommand::Projects,
        EchoCommand::Homelab,
        EchoCommand::Contact,
        EchoCommand::Github,
        EchoCommand::Skills,
        EchoCommand::Experience,
        EchoCommand::Runescape,
    ];

    /// Order used by `ls -la`
    pub const LISTING_ORDER: [EchoCommand; 8] = [
        EchoCommand::Help,
        EchoCommand::Whoami,
        EchoCommand::Experience,
        EchoCommand::Skills,
        EchoCommand::Projects,
        EchoCommand::Homelab,
        EchoCommand::Github,
        EchoCommand::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EchoCommand::Help => "help",
            EchoCommand::Whoami => "whoami",
            EchoCommand::Projects => "projects",
            EchoCommand::Homelab => "homelab",
            EchoCommand::Contact => "contact",
            EchoCommand::Github => "github",
            EchoCommand::Skills => "skills",
            EchoCommand::Experience => "experience",
            EchoCommand::Runescape => "runescape",
        }
    }
}

impl UtilityCommand {
    pub const ALL: [UtilityCommand; 3] = [
        UtilityCommand::Clear,
        UtilityCommand::ListAll,
        UtilityCommand::Cv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UtilityCommand::Clear => "clear",
            UtilityCommand::ListAll => "ls -la",
            UtilityCommand::Cv => "cv",
        }
    }
}

impl Command {
    /// Every known command, echo commands first
    pub const ALL: [Command; 12] = [
        Command::Echo(EchoCommand::Help),
        Command::Echo(EchoCommand::Whoami),
        Command::Echo(EchoCommand::Projects),
        Command::Echo(EchoCommand::Homelab),
        Command::Echo(EchoCommand::Contact),
        Command::Echo(EchoCommand::Github),
        Command::Echo(EchoCommand::Skills),
        Command::Echo(EchoCommand::Experience),
        Command::Echo(EchoCommand::Runescape),
        Command::Utility(UtilityCommand::Clear),
        Command::Utility(UtilityCommand::ListAll),
        Command::Utility(UtilityCommand::Cv),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Echo(cmd) => cmd.name(),
            Command::Utility(cmd) => cmd.name(),
        }
    }

    /// Exact lookup by name, no normalization
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize raw input the way the prompt does before lookup
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Classify a line of input
///
/// Input is trimmed and lower-cased first, so `"  WhoAmI "` is `whoami`.
pub fn classify(input: &str) -> Classification {
    let normalized = normalize(input);
    let classification = match Command::from_name(&normalized) {
        Some(Command::Echo(cmd)) => Classification::Echo(cmd),
        Some(Command::Utility(cmd)) => Classification::Utility(cmd),
        None => Classification::Invalid(normalized),
    };
    debug!("Classified {:?} as {:?}", input, classification);
    classification
}
