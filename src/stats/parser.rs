//! Hiscore payload parsing
//!
//! The payload is plain text: one line per skill, each line
//! `rank,level,experience`. Skills are identified by position only, so a
//! short payload is an error rather than a partial result.

use tracing::debug;

use crate::models::{StatRecord, SKILL_NAMES};

/// Why a payload could not be turned into stat records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least {expected} stat lines, found {found}")]
    MissingLines { expected: usize, found: usize },

    #[error("line {line} ({skill}) is malformed: {reason}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        skill: &'static str,
        reason: String,
    },
}

/// Parse a hiscore payload into one record per skill, in schema order
///
/// Lines after the skill block (minigames, bosses) are ignored.
pub fn parse_stats(payload: &str) -> Result<Vec<StatRecord>, ParseError> {
    let lines: Vec<&str> = payload.lines().collect();
    if lines.len() < SKILL_NAMES.len() {
        return Err(ParseError::MissingLines {
            expected: SKILL_NAMES.len(),
            found: lines.len(),
        });
    }

    let records = SKILL_NAMES
        .iter()
        .zip(lines.iter())
        .enumerate()
        .map(|(index, (skill, line))| parse_line(index + 1, skill, line))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} stat records", records.len());
    Ok(records)
}

fn parse_line(line_no: usize, skill: &'static str, line: &str) -> Result<StatRecord, ParseError> {
    let malformed = |reason: String| ParseError::MalformedLine {
        line: line_no,
        skill,
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(malformed(format!(
            "expected 3 comma separated fields, found {}",
            fields.len()
        )));
    }

    let number = |field: &str, what: &str| {
        field
            .parse::<i64>()
            .map_err(|_| malformed(format!("{} '{}' is not an integer", what, field)))
    };

    Ok(StatRecord::new(
        skill,
        number(fields[0], "rank")?,
        number(fields[1], "level")?,
        number(fields[2], "experience")?,
    ))
}
