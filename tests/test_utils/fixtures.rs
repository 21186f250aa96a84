//! Test Fixtures
//!
//! Common test data for terminal and stats tests

use chrono::NaiveDate;
use termfolio::config::StatsConfig;
use termfolio::{ContentRegistry, Terminal};

/// Day all dated content is rendered against
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// Terminal with the `>` prompt and a pinned date
pub fn create_test_terminal() -> Terminal {
    Terminal::with_registry(">", ContentRegistry::dated(test_day()))
}

/// A hiscore payload with `lines` rows; row `i` is `i+1,i+10,(i+1)*1000`
pub fn hiscore_payload(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{},{},{}", i + 1, i + 10, (i + 1) * 1000))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stats config pointing at fake proxies
pub fn test_stats_config(proxies: &[&str]) -> StatsConfig {
    StatsConfig {
        username: "To-chek".to_string(),
        target_url: "https://hiscore.test/index_lite.ws".to_string(),
        proxies: proxies.iter().map(|p| p.to_string()).collect(),
        request_timeout_secs: 1,
    }
}
