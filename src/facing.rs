use std::fmt;

/// A compass direction the robot can face.
///
/// The variants are declared in clockwise order, so turning is index
/// arithmetic modulo 4 over [`Facing::CLOCKWISE`] rather than a lookup
/// table keyed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

/// A quarter-turn direction, as requested by the LEFT and RIGHT commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Facing {
    /// All facings in clockwise order, NORTH first.
    pub const CLOCKWISE: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Parse a facing token. Tokens are expected already uppercased; anything
    /// other than the four exact names is rejected.
    pub fn from_token(token: &str) -> Option<Facing> {
        match token {
            "NORTH" => Some(Facing::North),
            "EAST" => Some(Facing::East),
            "SOUTH" => Some(Facing::South),
            "WEST" => Some(Facing::West),
            _ => None,
        }
    }

    /// The facing after one quarter-turn.
    pub fn turned(self, turn: Turn) -> Facing {
        // A left turn is three rights; avoids signed index arithmetic.
        let offset = match turn {
            Turn::Right => 1,
            Turn::Left => 3,
        };
        Self::CLOCKWISE[(self as usize + offset) % 4]
    }

    /// Unit vector for one MOVE step in this facing, with NORTH as +y and
    /// EAST as +x.
    pub fn unit_vector(self) -> (i64, i64) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        };
        f.write_str(name)
    }
}
