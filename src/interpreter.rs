use crate::command::{self, Command, ParsedLine};
use crate::grid::{Bounds, Position};
use crate::state::RobotState;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// The robot command interpreter.
///
/// The interpreter owns the immutable grid bounds and nothing else: it keeps
/// no state between calls. The caller holds the [`RobotState`] and threads
/// the value returned by [`Interpreter::apply`] into the next call, which is
/// what [`Interpreter::run`] and [`Interpreter::repl`] do for whole command
/// streams.
///
/// Example
/// ```
/// use robot_commands::{Interpreter, RobotState};
/// let interp = Interpreter::default();
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let state = interp
///     .apply(RobotState::Unplaced, "PLACE 0,0,NORTH", &mut out, &mut err)
///     .unwrap();
/// interp.apply(state, "REPORT", &mut out, &mut err).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Pos: 0,0 Face: NORTH\n");
/// ```
pub struct Interpreter {
    bounds: Bounds,
}

impl Interpreter {
    /// Create an interpreter over the given grid bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Apply one line of input to `state` and return the next state.
    ///
    /// No input text ever fails: malformed or illegal commands return the
    /// input state verbatim. REPORT output and the RESET notice go to
    /// `stdout`, the PLACE coordinate diagnostic to `stderr`, and a write
    /// failure on either sink is the only error path.
    pub fn apply(
        &self,
        state: RobotState,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<RobotState> {
        let next = match command::parse_line(line) {
            ParsedLine::Ignored => None,
            ParsedLine::BadPlacePosition { first, second } => {
                writeln!(
                    stderr,
                    "Unable to parse position in PLACE command - ({}, {})",
                    first, second
                )?;
                None
            }
            ParsedLine::Command(cmd) => self.execute(state, cmd, stdout)?,
        };
        Ok(next.unwrap_or(state))
    }

    /// Evaluate a recognized command against the current state.
    ///
    /// Returns the replacement state, or `None` when the command leaves the
    /// state unchanged (gated while unplaced, target out of bounds, or
    /// report-only).
    fn execute(
        &self,
        state: RobotState,
        cmd: Command,
        stdout: &mut dyn Write,
    ) -> Result<Option<RobotState>> {
        match cmd {
            Command::Place { x, y, facing } => {
                let position = Position::new(x, y);
                if self.bounds.contains(position) {
                    Ok(Some(RobotState::placed(position, facing)))
                } else {
                    Ok(None)
                }
            }
            Command::Reset => {
                writeln!(stdout, ">>> Reset <<<")?;
                Ok(Some(RobotState::Unplaced))
            }
            Command::Move => {
                let RobotState::Placed(placement) = state else {
                    return Ok(None);
                };
                let candidate = placement.position.stepped(placement.facing);
                if self.bounds.contains(candidate) {
                    Ok(Some(RobotState::placed(candidate, placement.facing)))
                } else {
                    Ok(None)
                }
            }
            Command::Turn(turn) => {
                let RobotState::Placed(placement) = state else {
                    return Ok(None);
                };
                Ok(Some(RobotState::placed(
                    placement.position,
                    placement.facing.turned(turn),
                )))
            }
            Command::Report => {
                let RobotState::Placed(placement) = state else {
                    return Ok(None);
                };
                writeln!(
                    stdout,
                    "Pos: {},{} Face: {}",
                    placement.position.x, placement.position.y, placement.facing
                )?;
                Ok(None)
            }
        }
    }

    /// Feed every line from `input` through the interpreter, threading the
    /// state between commands, and return the final state.
    pub fn run<R: BufRead>(
        &self,
        input: R,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<RobotState> {
        let mut state = RobotState::Unplaced;
        for line in input.lines() {
            state = self.apply(state, &line?, stdout, stderr)?;
        }
        Ok(state)
    }

    /// Read commands interactively until Ctrl-C or Ctrl-D.
    ///
    /// Every line goes through the same [`Interpreter::apply`] path as file
    /// input; output goes to the process streams.
    pub fn repl(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut state = RobotState::Unplaced;

        loop {
            match rl.readline("🤖> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    state = self.apply(
                        state,
                        &line,
                        &mut std::io::stdout(),
                        &mut std::io::stderr(),
                    )?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// An interpreter over the classic 5x5 grid.
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facing::Facing;
    use std::io::Cursor;

    /// Apply one line and collect what it wrote to both sinks.
    fn apply_ok(
        interp: &Interpreter,
        state: RobotState,
        line: &str,
    ) -> (RobotState, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let next = interp.apply(state, line, &mut out, &mut err).unwrap();
        (
            next,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    /// Run a whole script through the line loop and collect stdout.
    fn run_script(interp: &Interpreter, script: &str) -> (RobotState, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let state = interp
            .run(Cursor::new(script.to_string()), &mut out, &mut err)
            .unwrap();
        (
            state,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_commands_before_place_are_silent_no_ops() {
        let interp = Interpreter::default();
        for line in ["MOVE", "LEFT", "RIGHT", "REPORT"] {
            let (state, out, err) = apply_ok(&interp, RobotState::Unplaced, line);
            assert_eq!(state, RobotState::Unplaced, "{line} must not act unplaced");
            assert!(out.is_empty());
            assert!(err.is_empty());
        }
    }

    #[test]
    fn test_place_within_bounds_takes_effect() {
        let interp = Interpreter::default();
        let (state, out, err) = apply_ok(&interp, RobotState::Unplaced, "PLACE 1,2,EAST");
        assert_eq!(
            state,
            RobotState::placed(Position::new(1, 2), Facing::East)
        );
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_place_replaces_an_earlier_placement() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(4, 4), Facing::South);
        let (state, _, _) = apply_ok(&interp, start, "PLACE 1,2,EAST");
        assert_eq!(
            state,
            RobotState::placed(Position::new(1, 2), Facing::East)
        );
    }

    #[test]
    fn test_place_out_of_bounds_leaves_state_untouched() {
        let interp = Interpreter::default();

        let (state, out, err) = apply_ok(&interp, RobotState::Unplaced, "PLACE 5,5,NORTH");
        assert_eq!(state, RobotState::Unplaced);
        assert!(out.is_empty());
        assert!(err.is_empty());

        let start = RobotState::placed(Position::new(2, 2), Facing::North);
        let (state, _, _) = apply_ok(&interp, start, "PLACE -1,0,WEST");
        assert_eq!(state, start);
    }

    #[test]
    fn test_move_never_leaves_the_grid() {
        let bounds = Bounds::new(3, 3).unwrap();
        let interp = Interpreter::new(bounds);
        for x in 0..3 {
            for y in 0..3 {
                for facing in Facing::CLOCKWISE {
                    let start = RobotState::placed(Position::new(x, y), facing);
                    let (next, _, _) = apply_ok(&interp, start, "MOVE");
                    let RobotState::Placed(placement) = next else {
                        panic!("a placed robot must stay placed after MOVE");
                    };
                    assert!(bounds.contains(placement.position));
                    assert_eq!(placement.facing, facing);
                }
            }
        }
    }

    #[test]
    fn test_move_at_the_edge_keeps_position_and_facing() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(0, 0), Facing::South);
        let (state, _, _) = apply_ok(&interp, start, "MOVE");
        assert_eq!(state, start);
    }

    #[test]
    fn test_turning_keeps_the_position() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(2, 3), Facing::North);
        let (state, _, _) = apply_ok(&interp, start, "LEFT");
        assert_eq!(
            state,
            RobotState::placed(Position::new(2, 3), Facing::West)
        );
        let (state, _, _) = apply_ok(&interp, state, "RIGHT");
        assert_eq!(state, start);
    }

    #[test]
    fn test_report_writes_position_and_facing() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(3, 1), Facing::West);
        let (state, out, err) = apply_ok(&interp, start, "REPORT");
        assert_eq!(state, start);
        assert_eq!(out, "Pos: 3,1 Face: WEST\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_bad_place_coordinates_report_and_keep_state() {
        let interp = Interpreter::default();
        let (state, out, err) = apply_ok(&interp, RobotState::Unplaced, "PLACE zero,zero,NORTH");
        assert_eq!(state, RobotState::Unplaced);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "Unable to parse position in PLACE command - (ZERO, ZERO)\n"
        );
    }

    #[test]
    fn test_place_with_invalid_facing_is_silent() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(0, 0), Facing::East);
        let (state, out, err) = apply_ok(&interp, start, "PLACE 1 2 UP");
        assert_eq!(state, start);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_reset_returns_to_unplaced_and_says_so() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(4, 0), Facing::South);
        let (state, out, err) = apply_ok(&interp, start, "RESET");
        assert_eq!(state, RobotState::Unplaced);
        assert_eq!(out, ">>> Reset <<<\n");
        assert!(err.is_empty());

        let (state, out, _) = apply_ok(&interp, RobotState::Unplaced, "RESET");
        assert_eq!(state, RobotState::Unplaced);
        assert_eq!(out, ">>> Reset <<<\n");
    }

    #[test]
    fn test_unknown_commands_change_nothing() {
        let interp = Interpreter::default();
        let start = RobotState::placed(Position::new(0, 0), Facing::North);
        let (state, out, err) = apply_ok(&interp, start, "JUMP");
        assert_eq!(state, start);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_scenario_move_north_from_origin() {
        let interp = Interpreter::default();
        let (state, out, _) = run_script(&interp, "PLACE 0,0,NORTH\nMOVE\nREPORT\n");
        assert_eq!(
            state,
            RobotState::placed(Position::new(0, 1), Facing::North)
        );
        assert_eq!(out, "Pos: 0,1 Face: NORTH\n");
    }

    #[test]
    fn test_scenario_turn_left_at_origin() {
        let interp = Interpreter::default();
        let (_, out, _) = run_script(&interp, "PLACE 0,0,NORTH\nLEFT\nREPORT\n");
        assert_eq!(out, "Pos: 0,0 Face: WEST\n");
    }

    #[test]
    fn test_scenario_east_wall_stops_the_robot() {
        let interp = Interpreter::default();
        let script = "PLACE 1,2,EAST\nMOVE\nMOVE\nMOVE\nMOVE\nMOVE\nREPORT\n";
        let (state, out, _) = run_script(&interp, script);
        assert_eq!(
            state,
            RobotState::placed(Position::new(4, 2), Facing::East)
        );
        assert_eq!(out, "Pos: 4,2 Face: EAST\n");
    }

    #[test]
    fn test_scenario_mixed_case_blank_lines_and_reset() {
        let interp = Interpreter::default();
        let script = "place 2,2,south\n\nmove\nreport\nRESET\nMOVE\nREPORT\n";
        let (state, out, _) = run_script(&interp, script);
        // After the reset the trailing MOVE and REPORT are gated again.
        assert_eq!(state, RobotState::Unplaced);
        assert_eq!(out, "Pos: 2,1 Face: SOUTH\n>>> Reset <<<\n");
    }

    #[test]
    fn test_run_on_a_custom_grid() {
        let interp = Interpreter::new(Bounds::new(2, 8).unwrap());
        let script = "PLACE 1,0,NORTH\nMOVE\nMOVE\nMOVE\nREPORT\n";
        let (_, out, _) = run_script(&interp, script);
        assert_eq!(out, "Pos: 1,3 Face: NORTH\n");
    }
}
