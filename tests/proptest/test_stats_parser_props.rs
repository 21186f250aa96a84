//! Property-based tests for the hiscore parser

use proptest::prelude::*;
use termfolio::models::SKILL_NAMES;
use termfolio::stats::parse_stats;

fn stat_line() -> impl Strategy<Value = (i64, i64, i64)> {
    (-1i64..2_000_000, -1i64..100, -1i64..200_000_000)
}

proptest! {
    #[test]
    fn test_parser_doesnt_panic(s in "\\PC*") {
        let _ = parse_stats(&s);
    }

    #[test]
    fn test_valid_payload_yields_one_record_per_skill(
        rows in prop::collection::vec(stat_line(), 24..40),
    ) {
        let payload: Vec<String> = rows
            .iter()
            .map(|(rank, level, xp)| format!("{},{},{}", rank, level, xp))
            .collect();
        let records = parse_stats(&payload.join("\n")).unwrap();

        prop_assert_eq!(records.len(), SKILL_NAMES.len());
        for ((record, name), (rank, level, xp)) in records.iter().zip(SKILL_NAMES).zip(&rows) {
            prop_assert_eq!(record.name.as_str(), name);
            prop_assert_eq!(record.rank, *rank);
            prop_assert_eq!(record.level, *level);
            prop_assert_eq!(record.experience, *xp);
        }
    }

    #[test]
    fn test_short_payload_is_rejected(rows in prop::collection::vec(stat_line(), 0..24)) {
        let payload: Vec<String> = rows
            .iter()
            .map(|(rank, level, xp)| format!("{},{},{}", rank, level, xp))
            .collect();
        prop_assert!(parse_stats(&payload.join("\n")).is_err());
    }
}
