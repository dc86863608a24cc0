//! Turning one line of input into a robot command.

use crate::facing::{Facing, Turn};
use regex::Regex;
use std::sync::OnceLock;

/// A recognized command, ready to apply to the robot state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `PLACE X Y FACING`: put the robot on the grid.
    Place { x: i64, y: i64, facing: Facing },
    /// `MOVE`: one step in the current facing.
    Move,
    /// `LEFT` / `RIGHT`: a quarter-turn in place.
    Turn(Turn),
    /// `REPORT`: print the current position and facing.
    Report,
    /// `RESET`: back to the initial unplaced state.
    Reset,
}

/// Outcome of scanning one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A recognized command.
    Command(Command),
    /// PLACE with a valid facing but coordinates that are not integers.
    /// Carries both offending tokens so the interpreter can report them.
    BadPlacePosition { first: String, second: String },
    /// Blank or unrecognized input; skipped silently.
    Ignored,
}

/// Runs of whitespace and/or commas separate PLACE arguments, so
/// `PLACE 0,0,NORTH` and `PLACE 0, 0, NORTH` read the same.
fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"))
}

/// Scan one line of input.
///
/// The line is trimmed and uppercased first, which makes every comparison
/// case-insensitive. PLACE and RESET are recognized by their leading
/// keyword; the argument-less commands only by an exact match, so `MOVE.`
/// is not a MOVE.
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim().to_uppercase();

    if line.starts_with("PLACE") {
        return parse_place(&line);
    }
    if line.starts_with("RESET") {
        return ParsedLine::Command(Command::Reset);
    }

    match line.as_str() {
        "MOVE" => ParsedLine::Command(Command::Move),
        "LEFT" => ParsedLine::Command(Command::Turn(Turn::Left)),
        "RIGHT" => ParsedLine::Command(Command::Turn(Turn::Right)),
        "REPORT" => ParsedLine::Command(Command::Report),
        _ => ParsedLine::Ignored,
    }
}

/// Parse the arguments of a PLACE line (already normalized).
///
/// The line is split on separator runs, empty fragments and the leading
/// keyword fragment dropped. The last remaining token must name a facing;
/// the first two are the coordinate candidates, and anything between them
/// and the facing is ignored. A missing or invalid facing is a silent
/// no-op; coordinate tokens that are not integers surface as
/// [`ParsedLine::BadPlacePosition`].
fn parse_place(line: &str) -> ParsedLine {
    let tokens: Vec<&str> = separators()
        .split(line)
        .filter(|t| !t.is_empty())
        .skip(1)
        .collect();

    let Some(facing) = tokens.last().and_then(|t| Facing::from_token(t)) else {
        return ParsedLine::Ignored;
    };
    if tokens.len() < 2 {
        return ParsedLine::Ignored;
    }

    match (tokens[0].parse::<i64>(), tokens[1].parse::<i64>()) {
        (Ok(x), Ok(y)) => ParsedLine::Command(Command::Place { x, y, facing }),
        _ => ParsedLine::BadPlacePosition {
            first: tokens[0].to_string(),
            second: tokens[1].to_string(),
        },
    }
}
