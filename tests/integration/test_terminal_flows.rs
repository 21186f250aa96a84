//! Integration Tests for Terminal Flows
//!
//! Drive the terminal the way the window does: submit lines, recall history,
//! complete input, and feed back stats results.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use termfolio::models::EntryKind;
use termfolio::stats::{parse_stats, FetchError};
use termfolio::terminal::{StatsRequest, STATS_FETCH_FAILED};
use termfolio::{EchoCommand, Submission, Terminal};
use test_utils::{create_test_terminal, hiscore_payload};

fn start_lookup(terminal: &mut Terminal, line: &str) -> StatsRequest {
    match terminal.submit(line) {
        Submission::FetchStats(request) => request,
        other => panic!("{:?} did not start a lookup: {:?}", line, other),
    }
}

fn section_titles(terminal: &Terminal) -> Vec<String> {
    terminal
        .output()
        .iter()
        .filter_map(|entry| match &entry.kind {
            EntryKind::Content {
                title: Some(title), ..
            } => Some(title.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_every_echo_command_renders() {
    let mut terminal = create_test_terminal();
    for command in EchoCommand::ALL {
        if command == EchoCommand::Runescape {
            continue;
        }
        let before = terminal.output().len();
        assert_eq!(terminal.submit(command.name()), Submission::Rendered);
        assert_eq!(terminal.output().len(), before + 2, "{}", command.name());
    }
    assert_eq!(terminal.history().len(), 8);
}

#[test]
fn test_unknown_command_adds_exactly_one_error() {
    let mut terminal = create_test_terminal();
    terminal.submit("help");
    let before = terminal.output().len();

    terminal.submit("sudo rm -rf /");

    let errors: Vec<_> = terminal.output().iter().filter(|e| e.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].plain_text(), "command not found: sudo rm -rf /");
    assert_eq!(terminal.output().len(), before + 2);
    assert_eq!(terminal.history().last(), Some("sudo rm -rf /"));
}

#[test]
fn test_blank_input_is_an_unknown_command() {
    let mut terminal = create_test_terminal();
    terminal.submit("help");

    for blank in ["", "   "] {
        let before = terminal.output().len();
        let errors_before = terminal.output().iter().filter(|e| e.is_error()).count();

        assert_eq!(terminal.submit(blank), Submission::Rendered);

        let entries = terminal.output().entries();
        assert_eq!(entries.len(), before + 2);
        assert!(entries[before].is_echo());
        assert_eq!(
            terminal.output().iter().filter(|e| e.is_error()).count(),
            errors_before + 1
        );
        assert_eq!(entries[before + 1].plain_text(), "command not found: ");
    }
    assert_eq!(terminal.history().entries(), &["help"]);
}

#[test]
fn test_blank_input_keeps_recall_position() {
    let mut terminal = create_test_terminal();
    terminal.submit("help");
    terminal.submit("skills");
    assert_eq!(terminal.recall_previous(), "skills");
    assert_eq!(terminal.recall_previous(), "help");

    terminal.submit("   ");
    assert_eq!(terminal.history().cursor(), 0);
    assert_eq!(terminal.recall_next(), "skills");
}

#[test]
fn test_clear_always_empties_log() {
    let mut terminal = create_test_terminal();
    assert_eq!(terminal.submit("clear"), Submission::Cleared);
    assert!(terminal.output().is_empty());

    for line in ["help", "nope", "skills", "ls -la"] {
        terminal.submit(line);
    }
    terminal.autocomplete("c");
    terminal.submit("clear");
    assert!(terminal.output().is_empty());
    assert_eq!(terminal.history().last(), Some("clear"));
}

#[test]
fn test_list_all_order_is_stable() {
    let mut terminal = create_test_terminal();
    let expected = vec![
        "help", "whoami", "experience", "skills", "projects", "homelab", "github", "contact",
    ];

    terminal.submit("whoami");
    terminal.submit("ls -la");
    assert_eq!(section_titles(&terminal), expected);
    assert!(terminal.output().entries()[0].is_echo());

    terminal.submit("ls -la");
    assert_eq!(section_titles(&terminal), expected);
    assert_eq!(terminal.output().len(), 9);
}

#[test]
fn test_completion_flows() {
    let mut terminal = create_test_terminal();
    assert_eq!(terminal.autocomplete("he"), "help");
    assert_eq!(terminal.autocomplete("ls"), "ls -la");

    assert_eq!(terminal.autocomplete("c"), "c");
    let last = terminal.output().last().unwrap();
    assert_eq!(
        last.kind,
        EntryKind::Candidates(vec!["clear".into(), "contact".into(), "cv".into()])
    );

    // Completion is literal and case-sensitive
    let before = terminal.output().len();
    assert_eq!(terminal.autocomplete("HE"), "HE");
    assert_eq!(terminal.output().len(), before);
}

#[test]
fn test_history_walk_after_mixed_input() {
    let mut terminal = create_test_terminal();
    for line in ["Help", "  ", "bogus", "cv"] {
        terminal.submit(line);
    }
    assert_eq!(terminal.history().entries(), &["Help", "bogus", "cv"]);

    assert_eq!(terminal.recall_previous(), "cv");
    assert_eq!(terminal.recall_previous(), "bogus");
    assert_eq!(terminal.recall_previous(), "Help");
    assert_eq!(terminal.recall_previous(), "Help");
    assert_eq!(terminal.history().cursor(), 0);

    terminal.submit("skills");
    assert_eq!(terminal.history().cursor(), 4);
    assert_eq!(terminal.recall_next(), "");
}

#[test]
fn test_runescape_success_renders_every_skill() {
    let mut terminal = create_test_terminal();
    let request = start_lookup(&mut terminal, "RuneScape");
    assert_eq!(terminal.output().len(), 1);

    let stats = parse_stats(&hiscore_payload(30)).unwrap();
    terminal.complete_stats(request, Ok(stats));

    let text = terminal.output().last().unwrap().plain_text();
    assert!(text.contains("- Overall: Level 10 (XP: 1,000)"));
    assert!(text.contains("- Construction: Level 33 (XP: 24,000)"));
    assert!(text.contains("over 22 years"));
}

#[test]
fn test_runescape_failure_renders_message() {
    let mut terminal = create_test_terminal();
    let request = start_lookup(&mut terminal, "runescape");
    terminal.complete_stats(
        request,
        Err(FetchError::AllProxiesFailed { attempts: vec![] }.into()),
    );
    let last = terminal.output().last().unwrap();
    assert!(last.is_error());
    assert_eq!(last.plain_text(), STATS_FETCH_FAILED);
}

#[test]
fn test_late_stats_after_clear_leave_log_empty() {
    let mut terminal = create_test_terminal();
    let request = start_lookup(&mut terminal, "runescape");
    terminal.submit("clear");

    let stats = parse_stats(&hiscore_payload(24)).unwrap();
    terminal.complete_stats(request, Ok(stats));
    assert!(terminal.output().is_empty());
    assert!(!terminal.stats_pending());
}

#[test]
fn test_stats_land_under_their_own_echo() {
    let mut terminal = create_test_terminal();
    let stale = start_lookup(&mut terminal, "runescape");
    terminal.submit("ls -la");
    let fresh = start_lookup(&mut terminal, "runescape");

    terminal.complete_stats(stale, Err(FetchError::NoProxies.into()));
    terminal.complete_stats(fresh, Err(FetchError::NoProxies.into()));

    let entries = terminal.output().entries();
    assert_eq!(entries.len(), 9 + 2);
    assert_eq!(entries[9].plain_text(), "> runescape");
    assert_eq!(entries[10].plain_text(), STATS_FETCH_FAILED);
    assert_eq!(entries.iter().filter(|e| e.is_error()).count(), 1);
}
