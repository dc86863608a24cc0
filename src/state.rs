use crate::facing::Facing;
use crate::grid::Position;

/// Where a placed robot stands and which way it points.
///
/// Note: fields are public for simplicity to keep the crate small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub facing: Facing,
}

/// The robot's full state between commands.
///
/// A robot is either entirely off the grid or placed with both a position
/// and a facing; a state with only one of the two is unrepresentable. A
/// placed position is always within the grid bounds, which the interpreter
/// guarantees by checking every candidate position before committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobotState {
    /// Not yet on the grid. Only PLACE and RESET do anything here.
    #[default]
    Unplaced,
    /// On the grid, with a position and a facing.
    Placed(Placement),
}

impl RobotState {
    /// Shorthand for a placed state.
    pub fn placed(position: Position, facing: Facing) -> Self {
        RobotState::Placed(Placement { position, facing })
    }
}
