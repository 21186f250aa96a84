//! Integration Tests for the Hiscore Lookup
//!
//! Exercise the proxy fallback end to end with a scripted fetcher.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::time::Duration;

use termfolio::stats::{
    first_success, AttemptError, FetchError, ProxyEndpoint, StatsClient, StatsError,
};
use test_utils::{hiscore_payload, test_stats_config, ScriptedFetcher, ScriptedReply};

const TARGET: &str = "https://hiscore.test/index_lite.ws?player=To-chek";

#[tokio::test]
async fn test_falls_through_to_first_working_proxy() {
    let fetcher = ScriptedFetcher::new()
        .on("https://a/", ScriptedReply::Status(429))
        .on("https://b/", ScriptedReply::Transport("reset".into()))
        .on("https://c/", ScriptedReply::Body(hiscore_payload(24)))
        .on("https://d/", ScriptedReply::Body("unused".into()));
    let client = StatsClient::with_fetcher(
        &test_stats_config(&["https://a/", "https://b/", "https://c/", "https://d/"]),
        fetcher,
    );

    let stats = client.fetch_stats().await.unwrap();
    assert_eq!(stats.len(), 24);
    assert_eq!(stats[0].name, "Overall");
    assert_eq!(stats[23].name, "Construction");
}

#[tokio::test]
async fn test_requests_are_sequential_and_ordered() {
    let fetcher = ScriptedFetcher::new().on("https://c/", ScriptedReply::Body("x".into()));
    let endpoints: Vec<_> = ["https://a/", "https://b/", "https://c/"]
        .into_iter()
        .map(ProxyEndpoint::new)
        .collect();

    let body = first_success(&fetcher, &endpoints, TARGET, Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(body, "x");
    assert_eq!(
        fetcher.requests(),
        vec![
            format!("https://a/{}", TARGET),
            format!("https://b/{}", TARGET),
            format!("https://c/{}", TARGET),
        ]
    );
}

#[tokio::test]
async fn test_slow_proxy_times_out_and_next_is_tried() {
    let fetcher = ScriptedFetcher::new()
        .on("https://slow/", ScriptedReply::Slow(Duration::from_secs(5), "late".into()))
        .on("https://fast/", ScriptedReply::Body("on time".into()));
    let endpoints = vec![ProxyEndpoint::new("https://slow/"), ProxyEndpoint::new("https://fast/")];

    let body = first_success(&fetcher, &endpoints, TARGET, Duration::from_millis(50))
        .await
        .unwrap();
    assert_eq!(body, "on time");
}

#[tokio::test]
async fn test_all_proxies_failing_is_a_fetch_error() {
    let fetcher = ScriptedFetcher::new().on("https://a/", ScriptedReply::Status(500));
    let client = StatsClient::with_fetcher(&test_stats_config(&["https://a/", "https://b/"]), fetcher);

    match client.fetch_stats().await {
        Err(StatsError::Fetch(FetchError::AllProxiesFailed { attempts })) => {
            assert_eq!(attempts.len(), 2);
            assert_eq!(attempts[0].error, AttemptError::Status(500));
            assert!(matches!(attempts[1].error, AttemptError::Transport(_)));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_short_payload_is_a_parse_error() {
    let fetcher = ScriptedFetcher::new().on("https://a/", ScriptedReply::Body(hiscore_payload(10)));
    let client = StatsClient::with_fetcher(&test_stats_config(&["https://a/"]), fetcher);

    let err = client.fetch_stats().await.unwrap_err();
    assert!(matches!(err, StatsError::Parse(_)));
}

#[tokio::test]
async fn test_empty_proxy_list() {
    let client = StatsClient::with_fetcher(&test_stats_config(&[]), ScriptedFetcher::new());
    assert_eq!(client.fetch_raw().await, Err(FetchError::NoProxies));
}
