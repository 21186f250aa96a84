//! Property-based tests for input classification

use proptest::prelude::*;
use termfolio::commands::{classify, normalize, Classification, Command};
use termfolio::Terminal;

proptest! {
    #[test]
    fn test_classify_doesnt_panic(s in "\\PC*") {
        let _ = classify(&s);
    }

    #[test]
    fn test_case_and_padding_are_irrelevant(
        index in 0..Command::ALL.len(),
        flips in prop::collection::vec(any::<bool>(), 0..16),
        left in "[ \t]{0,4}",
        right in "[ \t]{0,4}",
    ) {
        let name = Command::ALL[index].name();
        let mixed: String = name
            .chars()
            .enumerate()
            .map(|(i, c)| if flips.get(i).copied().unwrap_or(false) { c.to_ascii_uppercase() } else { c })
            .collect();
        let input = format!("{}{}{}", left, mixed, right);
        prop_assert_eq!(classify(&input), classify(name));
        prop_assert!(!matches!(classify(&input), Classification::Invalid(_)));
    }

    #[test]
    fn test_unknown_words_are_invalid(word in "[a-z]{1,12}") {
        prop_assume!(Command::from_name(&word).is_none());
        prop_assert_eq!(classify(&word), Classification::Invalid(word.clone()));
    }

    #[test]
    fn test_submit_outside_command_set_adds_one_error(line in "[a-z \t-]{0,12}") {
        prop_assume!(Command::from_name(&normalize(&line)).is_none());
        let mut terminal = Terminal::new(">");
        terminal.submit(&line);
        prop_assert_eq!(terminal.output().len(), 2);
        prop_assert_eq!(terminal.output().iter().filter(|e| e.is_error()).count(), 1);
    }

    #[test]
    fn test_normalize_is_idempotent(s in "[ -~\t]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
