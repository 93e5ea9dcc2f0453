//! Pose of the robot on the grid.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Cardinal direction the robot faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// +y
    North,
    /// -y
    South,
    /// +x
    East,
    /// -x
    West,
}

impl Heading {
    /// Single-letter code used in status strings.
    pub const fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Unit offset of the neighbouring cell in this direction.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Heading {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(format!("unknown Heading: {s:?}")),
        }
    }
}

/// Position and heading.
///
/// Renders as `(x,y,H)`, the body of every status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotState {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Facing direction.
    pub heading: Heading,
}

impl RobotState {
    /// Pose set by `initialize()`: origin, facing north.
    pub const ORIGIN: Self = Self {
        x: 0,
        y: 0,
        heading: Heading::North,
    };

    /// Create a pose.
    pub const fn new(x: i64, y: i64, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Cell the robot would enter by moving along its heading.
    pub const fn cell_ahead(&self) -> (i64, i64) {
        let (dx, dy) = self.heading.offset();
        (self.x + dx, self.y + dy)
    }

    /// Pose after a forward step.
    ///
    /// The wheel drive always advances the row counter, whatever the heading.
    pub const fn stepped_forward(self) -> Self {
        Self {
            y: self.y + 1,
            ..self
        }
    }

    /// Pose after a turn that snaps to `heading`.
    pub const fn facing(self, heading: Heading) -> Self {
        Self { heading, ..self }
    }
}

impl Default for RobotState {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.heading)
    }
}
