//! Content Registry
//!
//! Maps each echo command to its content block. Dates that feed the pages
//! (age, years played) are resolved against the registry's `today`.

use chrono::{Local, NaiveDate};

use super::{pages, ContentBlock};
use crate::commands::EchoCommand;
use crate::models::StatRecord;

#[derive(Debug, Clone)]
pub struct ContentRegistry {
    today: NaiveDate,
}

impl ContentRegistry {
    /// Registry dated with the local calendar day
    pub fn new() -> Self {
        Self::dated(Local::now().date_naive())
    }

    /// Registry pinned to a specific day
    pub fn dated(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Static block for an echo command
    ///
    /// `runescape` has no static content of its own; without stats it renders
    /// only the introduction. Use [`ContentRegistry::runescape`] once stats
    /// have been fetched.
    pub fn block(&self, command: EchoCommand) -> ContentBlock {
        match command {
            EchoCommand::Help => pages::help(),
            EchoCommand::Whoami => pages::whoami(self.today),
            EchoCommand::Projects => pages::projects(),
            EchoCommand::Homelab => pages::homelab(),
            EchoCommand::Contact => pages::contact(),
            EchoCommand::Github => pages::github(),
            EchoCommand::Skills => pages::skills(),
            EchoCommand::Experience => pages::experience(),
            EchoCommand::Runescape => pages::runescape(self.today, &[]),
        }
    }

    /// Hiscore page listing `stats`
    pub fn runescape(&self, stats: &[StatRecord]) -> ContentBlock {
        pages::runescape(self.today, stats)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
