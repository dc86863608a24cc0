//! A tiny, embeddable toy robot simulator.
//!
//! This crate provides the building blocks to drive a robot across a bounded
//! rectangular grid from a textual command stream. The core is a pure
//! state-transition function: each line of input maps the current
//! [`RobotState`] to the next one, and malformed or illegal commands leave
//! the state untouched instead of failing. It is intentionally small and
//! easy to read.
//!
//! The main entry point is [`Interpreter`], which applies command lines
//! against a fixed [`grid::Bounds`] and writes REPORT output and parse
//! diagnostics to caller-provided streams. The public modules [`command`],
//! [`facing`], [`grid`] and [`state`] expose the vocabulary types.

pub mod command;
pub mod facing;
pub mod grid;
mod interpreter;
pub mod state;

/// Just a convenient re-export of the command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
pub use state::RobotState;
