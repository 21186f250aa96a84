//! Property-based tests for history recall

use proptest::prelude::*;
use termfolio::history::HistoryBuffer;

#[derive(Debug, Clone)]
enum Step {
    Push(String),
    Previous,
    Next,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(Step::Push),
        Just(Step::Previous),
        Just(Step::Next),
    ]
}

proptest! {
    #[test]
    fn test_cursor_stays_in_bounds(steps in prop::collection::vec(step(), 0..60)) {
        let mut history = HistoryBuffer::new();
        for step in steps {
            match step {
                Step::Push(command) => {
                    let cursor = history.cursor();
                    history.push(&command);
                    if command.trim().is_empty() {
                        prop_assert_eq!(history.cursor(), cursor);
                    } else {
                        prop_assert_eq!(history.cursor(), history.len());
                    }
                }
                Step::Previous => {
                    history.recall_previous();
                }
                Step::Next => {
                    history.recall_next();
                }
            }
            prop_assert!(history.cursor() <= history.len());
        }
    }

    #[test]
    fn test_boundaries_are_idempotent(commands in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut history = HistoryBuffer::new();
        for command in &commands {
            history.push(command);
        }

        for _ in 0..commands.len() + 3 {
            history.recall_previous();
        }
        prop_assert_eq!(history.cursor(), 0);
        prop_assert_eq!(history.recall_previous(), commands[0].as_str());

        for _ in 0..commands.len() + 3 {
            history.recall_next();
        }
        prop_assert_eq!(history.cursor(), commands.len());
        prop_assert_eq!(history.recall_next(), "");
    }

    #[test]
    fn test_recall_walks_back_in_order(commands in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut history = HistoryBuffer::new();
        for command in &commands {
            history.push(command);
        }
        for expected in commands.iter().rev() {
            prop_assert_eq!(history.recall_previous(), expected.as_str());
        }
    }

    #[test]
    fn test_blank_commands_are_not_recorded(blanks in prop::collection::vec("[ \t]{0,5}", 0..10)) {
        let mut history = HistoryBuffer::new();
        for blank in &blanks {
            history.push(blank);
        }
        prop_assert!(history.is_empty());
    }
}
