//! termfolio - a personal portfolio that runs as a terminal window
//!
//! Visitors type commands such as `whoami`, `projects` or `skills` at a
//! simulated prompt and get pre-authored content back. This library holds
//! all interaction logic; the `termfolio` binary only draws it with eframe.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`commands`] - Closed command set and input classification
//! - [`terminal`] - Controller owning the output log, history and completion,
//!   plus the startup typing animation
//! - [`history`] - Submitted commands with arrow-key recall
//! - [`completion`] - Literal prefix completion over the command set
//! - [`content`] - Content blocks and their inline markup
//! - [`stats`] - Hiscore lookup through a list of fallback proxies
//! - [`download`] - Saving the bundled CV for the visitor
//!
//! ### Support
//!
//! - [`config`] - Configuration loading, validation and themes
//! - [`models`] - Output log entries and hiscore records
//! - [`ui`] - egui rendering of the terminal
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use termfolio::{Submission, Terminal};
//!
//! let mut terminal = Terminal::new(">");
//! assert_eq!(terminal.submit("whoami"), Submission::Rendered);
//! assert_eq!(terminal.autocomplete("he"), "help");
//! ```
//!
//! ## Architecture
//!
//! Commands are processed on the egui UI thread. The hiscore lookup is the
//! only blocking work; the binary runs it on a tokio runtime and sends the
//! result back over a `tokio::sync::mpsc` channel, drained every frame.

use tracing::{info, warn};

pub mod commands;
pub mod completion;
pub mod config;
pub mod content;
pub mod download;
pub mod error;
pub mod history;
pub mod models;
pub mod stats;
pub mod terminal;

// UI modules
pub mod ui;

// Re-exports for core functionality
pub use config::{Config, RuntimeConfig};
pub use error::{Error, Result};
pub use terminal::{Submission, Terminal, WelcomeTyper};

// Convenience re-exports for common types
pub use commands::{classify, Classification, Command, EchoCommand, UtilityCommand};
pub use config::loader::ConfigLoader;
pub use config::theme::ThemeManager;
pub use content::ContentRegistry;
pub use history::HistoryBuffer;
pub use models::{OutputEntry, StatRecord};
pub use stats::{StatsClient, StatsError};

/// The current version of termfolio from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load the runtime configuration from the default locations
///
/// A configuration that cannot be used (for example one naming an unknown
/// theme) is reported and replaced by the defaults.
///
/// # Examples
///
/// ```no_run
/// match termfolio::init() {
///     Ok(runtime) => println!("prompt: {}", runtime.config().terminal.prompt),
///     Err(e) => eprintln!("Initialization failed: {}", e),
/// }
/// ```
pub fn init() -> Result<RuntimeConfig> {
    info!("Initializing {} v{}", NAME, VERSION);

    match RuntimeConfig::new() {
        Ok(runtime) => Ok(runtime),
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            RuntimeConfig::from_config(Config::default())
        }
    }
}
