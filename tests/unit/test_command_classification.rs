//! Unit Tests for Command Classification

use termfolio::commands::{classify, normalize, Classification, Command, EchoCommand, UtilityCommand};

#[test]
fn test_every_known_name_classifies_to_itself() {
    for command in Command::ALL {
        let classification = classify(command.name());
        match (command, classification) {
            (Command::Echo(expected), Classification::Echo(got)) => assert_eq!(expected, got),
            (Command::Utility(expected), Classification::Utility(got)) => assert_eq!(expected, got),
            (command, other) => panic!("{} classified as {:?}", command, other),
        }
    }
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    assert_eq!(classify("  WHOAMI\t"), Classification::Echo(EchoCommand::Whoami));
    assert_eq!(classify("LS -LA"), Classification::Utility(UtilityCommand::ListAll));
    assert_eq!(normalize("  Cv "), "cv");
}

#[test]
fn test_near_misses_are_invalid() {
    for input in ["ls", "ls  -la", "helpme", "who ami", "clear!"] {
        assert!(
            matches!(classify(input), Classification::Invalid(_)),
            "{:?} should be invalid",
            input
        );
    }
}

#[test]
fn test_invalid_carries_normalized_input() {
    assert_eq!(
        classify("  Rm -Rf "),
        Classification::Invalid("rm -rf".to_string())
    );
}

#[test]
fn test_command_set_is_closed() {
    assert_eq!(Command::ALL.len(), 12);
    assert_eq!(EchoCommand::ALL.len(), 9);
    assert_eq!(UtilityCommand::ALL.len(), 3);
    assert_eq!(Command::from_name("runescape"), Some(Command::Echo(EchoCommand::Runescape)));
    assert_eq!(Command::from_name("RUNESCAPE"), None);
}
