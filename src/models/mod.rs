//! Core data models for termfolio
//!
//! Entries of the output log and the records parsed from the hiscore
//! service.

pub mod output_entry;
pub mod stat_record;

// Re-exports for convenience
pub use output_entry::{EntryKind, OutputEntry};
pub use stat_record::{StatRecord, SKILL_NAMES};
