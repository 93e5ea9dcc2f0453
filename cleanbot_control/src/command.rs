//! Motion commands and their wire tokens.

use crate::error::RobotError;
use cleanbot_common::hal::types::RotationDirection;
use core::fmt;
use core::str::FromStr;

/// One motion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance one cell (`f`).
    Forward,
    /// Rotate left, ending up facing west (`l`).
    TurnLeft,
    /// Rotate right, ending up facing east (`r`).
    TurnRight,
}

impl Command {
    /// Wire token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Forward => "f",
            Self::TurnLeft => "l",
            Self::TurnRight => "r",
        }
    }

    /// Rotation direction for turns, `None` for `Forward`.
    pub const fn rotation(self) -> Option<RotationDirection> {
        match self {
            Self::Forward => None,
            Self::TurnLeft => Some(RotationDirection::Left),
            Self::TurnRight => Some(RotationDirection::Right),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Command {
    type Err = RobotError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Self::Forward),
            "l" => Ok(Self::TurnLeft),
            "r" => Ok(Self::TurnRight),
            _ => Err(RobotError::InvalidCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_tokens() {
        assert_eq!("f".parse::<Command>(), Ok(Command::Forward));
        assert_eq!("l".parse::<Command>(), Ok(Command::TurnLeft));
        assert_eq!("r".parse::<Command>(), Ok(Command::TurnRight));
    }

    #[test]
    fn rejects_everything_else_with_the_token() {
        for bad in ["", "F", "b", "forward", " f"] {
            assert_eq!(
                bad.parse::<Command>(),
                Err(RobotError::InvalidCommand(bad.to_string()))
            );
        }
    }

    #[test]
    fn turns_map_to_rotation_directions() {
        assert_eq!(Command::Forward.rotation(), None);
        assert_eq!(Command::TurnLeft.rotation(), Some(RotationDirection::Left));
        assert_eq!(Command::TurnRight.rotation(), Some(RotationDirection::Right));
    }
}
