//! Test Utilities and Mocks
//!
//! Shared fixtures for the integration tests. Each test target pulls this in
//! with `#[path]`, so not every helper is used by every target.

#![allow(dead_code)]

pub mod fixtures;

// Re-exports for convenience
pub use fixtures::{create_test_terminal, hiscore_payload, test_day, test_stats_config};
pub use mock_fetcher::{ScriptedFetcher, ScriptedReply};
