use nom::{
    IResult, Parser, bytes::complete::take_while1, character::complete::multispace0,
    multi::many0, sequence::preceded,
};

use crate::commands::{BEGIN_MARKER, Command, CommandStream, END_MARKER};

enum ScanState {
    BeforeBegin,
    InBlock,
}

/// Keeps only the lines strictly between the first line containing `begin`
/// and the first subsequent line containing `end`. The marker lines
/// themselves are dropped. A missing end marker leaves the block open-ended;
/// a missing begin marker yields nothing.
pub fn extract_block<'a>(lines: &[&'a str], begin: &str, end: &str) -> Vec<&'a str> {
    let mut state = ScanState::BeforeBegin;
    let mut kept = Vec::new();

    for line in lines {
        match state {
            ScanState::BeforeBegin => {
                if line.contains(begin) {
                    state = ScanState::InBlock;
                }
            }
            ScanState::InBlock => {
                if line.contains(end) {
                    break;
                }
                kept.push(*line);
            }
        }
    }

    kept
}

fn token(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace())).parse(input)
}

/// Splits a line on runs of whitespace, never producing empty tokens.
pub fn split_tokens(line: &str) -> Vec<String> {
    let (_, tokens) = many0(token).parse(line).unwrap_or((line, Vec::new()));
    tokens.into_iter().map(str::to_string).collect()
}

/// Tokenizes the meaningful region of a draw stream. Raw blank lines are
/// dropped before the block scan; other lines lose trailing whitespace, so
/// a whitespace-only line inside the block survives as an empty command.
/// Absent or malformed markers are not an error, the stream just comes back
/// empty.
pub fn parse_draw(input: &str) -> CommandStream {
    let lines: Vec<&str> = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::trim_end)
        .collect();

    let block = extract_block(&lines, BEGIN_MARKER, END_MARKER);
    log::debug!("draw stream: {} of {} lines inside markers", block.len(), lines.len());

    block
        .into_iter()
        .map(|line| Command(split_tokens(line)))
        .collect()
}
