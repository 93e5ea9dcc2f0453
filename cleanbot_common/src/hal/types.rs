//! HAL signal and actuator types.
//!
//! - `SignalRole` - Functional name of every digital line on the board
//! - `RotationDirection` - Argument of a rotation-motor engagement
//! - `MotorEngagement` - Record of one completed actuator engagement

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─── SignalRole ─────────────────────────────────────────────────────

/// Functional role of a digital line.
///
/// Drivers resolve lines by role rather than by pin number; the pin number
/// comes from [`PinMap`](crate::hal::config::PinMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalRole {
    /// Recharge indicator LED (output).
    RechargeLed,
    /// Cleaning system enable (output).
    CleaningSystem,
    /// Infrared obstacle sensor (input).
    Infrared,
    /// Water level switch (input).
    WaterLevel,
    /// Wheel motor PWM enable (output).
    WheelPwm,
    /// Wheel motor drive input 1 (output).
    WheelIn1,
    /// Wheel motor drive input 2 (output).
    WheelIn2,
    /// Rotation motor drive input 1 (output).
    RotationIn1,
    /// Rotation motor drive input 2 (output).
    RotationIn2,
    /// Rotation motor PWM enable (output).
    RotationPwm,
    /// Shared motor driver standby disable (output).
    Standby,
}

impl SignalRole {
    /// All roles, inputs first.
    pub const ALL: [SignalRole; 11] = [
        Self::Infrared,
        Self::WaterLevel,
        Self::RechargeLed,
        Self::CleaningSystem,
        Self::WheelPwm,
        Self::WheelIn1,
        Self::WheelIn2,
        Self::RotationIn1,
        Self::RotationIn2,
        Self::RotationPwm,
        Self::Standby,
    ];

    /// Whether the line is read by the robot rather than driven.
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Infrared | Self::WaterLevel)
    }

    /// Config key of this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RechargeLed => "recharge_led",
            Self::CleaningSystem => "cleaning_system",
            Self::Infrared => "infrared",
            Self::WaterLevel => "water_level",
            Self::WheelPwm => "wheel_pwm",
            Self::WheelIn1 => "wheel_in1",
            Self::WheelIn2 => "wheel_in2",
            Self::RotationIn1 => "rotation_in1",
            Self::RotationIn2 => "rotation_in2",
            Self::RotationPwm => "rotation_pwm",
            Self::Standby => "standby",
        }
    }
}

impl fmt::Display for SignalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown SignalRole: {s:?}"))
    }
}

// ─── Motion ─────────────────────────────────────────────────────────

/// Direction of an in-place rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "l"),
            Self::Right => write!(f, "r"),
        }
    }
}

/// One completed actuator engagement, as recorded by drivers that keep a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotorEngagement {
    /// Wheel motor drove one cell forward.
    Wheel,
    /// Rotation motor turned in place.
    Rotation(RotationDirection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_role_round_trips_through_config_key() {
        for role in SignalRole::ALL {
            assert_eq!(role.as_str().parse::<SignalRole>(), Ok(role));
        }
        assert!("pwmc".parse::<SignalRole>().is_err());
    }

    #[test]
    fn only_sensors_are_inputs() {
        let inputs: Vec<_> = SignalRole::ALL.into_iter().filter(|r| r.is_input()).collect();
        assert_eq!(inputs, vec![SignalRole::Infrared, SignalRole::WaterLevel]);
    }

    #[test]
    fn rotation_direction_tokens() {
        assert_eq!(RotationDirection::Left.to_string(), "l");
        assert_eq!(RotationDirection::Right.to_string(), "r");
    }
}
