//! Unit Tests for Hiscore Payload Parsing

use termfolio::models::SKILL_NAMES;
use termfolio::stats::{parse_stats, ParseError};

/// A realistic payload: 24 skills followed by activity rows with two fields
fn live_like_payload() -> String {
    let mut lines: Vec<String> = (0..24)
        .map(|i| format!("{},{},{}", 1000 + i, 50 + i, 100_000 * (i + 1)))
        .collect();
    lines.extend(["-1,-1".to_string(), "12345,67".to_string()]);
    lines.join("\n") + "\n"
}

#[test]
fn test_records_follow_schema_order() {
    let records = parse_stats(&live_like_payload()).unwrap();
    assert_eq!(records.len(), SKILL_NAMES.len());
    for (record, name) in records.iter().zip(SKILL_NAMES) {
        assert_eq!(record.name, name);
    }
    assert_eq!(records[5].name, "Ranged");
    assert_eq!(records[5].rank, 1005);
    assert_eq!(records[5].level, 55);
    assert_eq!(records[5].experience, 600_000);
}

#[test]
fn test_twenty_three_lines_is_missing_lines() {
    let payload: Vec<String> = (0..23).map(|i| format!("{},1,0", i)).collect();
    assert_eq!(
        parse_stats(&payload.join("\n")),
        Err(ParseError::MissingLines {
            expected: 24,
            found: 23
        })
    );
}

#[test]
fn test_empty_payload() {
    assert!(matches!(
        parse_stats(""),
        Err(ParseError::MissingLines { found: 0, .. })
    ));
}

#[test]
fn test_malformed_line_is_reported_with_skill() {
    let mut lines: Vec<String> = (0..24).map(|i| format!("{},1,0", i)).collect();
    lines[3] = "4,99,lots".to_string();
    match parse_stats(&lines.join("\n")) {
        Err(ParseError::MalformedLine { line, skill, .. }) => {
            assert_eq!(line, 4);
            assert_eq!(skill, "Strength");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_html_error_page_is_rejected() {
    let page = "<html>\n<body>Too Many Requests</body>\n</html>";
    assert!(parse_stats(page).is_err());
}
