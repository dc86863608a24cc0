use crate::facing::Facing;
use anyhow::Result;

/// Immutable grid configuration for a single run.
///
/// Bounds define the legal coordinate range `[0, width) x [0, height)`.
/// They are fixed when the interpreter is created and never change while
/// commands are being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    width: i64,
    height: i64,
}

impl Bounds {
    /// Create bounds for a `width` x `height` grid.
    ///
    /// Both dimensions must be at least 1; a grid with no cells cannot hold
    /// a robot.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(anyhow::anyhow!(
                "grid bounds must be at least 1x1, got {}x{}",
                width,
                height
            ));
        }
        Ok(Self { width, height })
    }

    /// Whether `position` lies on the grid.
    ///
    /// The range is half-open per axis: a coordinate is legal when it is
    /// non-negative and strictly below the corresponding dimension. PLACE
    /// and MOVE both gate on this one predicate.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }
}

impl Default for Bounds {
    /// The classic 5x5 table.
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

/// A grid coordinate.
///
/// A `Position` may name any cell, including ones off the grid; callers
/// gate on [`Bounds::contains`] before committing to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in the given facing.
    pub fn stepped(self, facing: Facing) -> Self {
        let (dx, dy) = facing.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
