//! Simulation driver implementation.
//!
//! The `SimulationDriver` implements `RobotHal` by replaying the board's pin
//! sequences against a [`SignalBank`]. Sensor readings are settable, and every
//! motor engagement is recorded so callers can assert on actuator usage.

use super::io::SignalBank;
use super::state::SimulatedBattery;
use cleanbot_common::hal::config::{HalConfig, PinMap};
use cleanbot_common::hal::driver::{
    BatteryMonitor, HalError, MotionActuator, ObstacleSensor, PowerIndicators, RobotHal,
    WaterLevelSensor,
};
use cleanbot_common::hal::types::{MotorEngagement, RotationDirection, SignalRole};
use std::time::Duration;
use tracing::{debug, info};

/// Simulation driver implementing the `RobotHal` trait.
pub struct SimulationDriver {
    /// Driver name
    name: &'static str,
    /// Driver version
    version: &'static str,
    /// Initialized flag
    initialized: bool,
    /// Digital lines
    signals: SignalBank,
    /// Battery gauge
    battery: SimulatedBattery,
    /// Blocking time of each engagement
    settle: Duration,
    /// Completed engagements, oldest first
    engagements: Vec<MotorEngagement>,
}

impl SimulationDriver {
    /// Create a new, uninitialized simulation driver.
    pub fn new() -> Self {
        Self {
            name: super::DRIVER_NAME,
            version: env!("CARGO_PKG_VERSION"),
            initialized: false,
            signals: SignalBank::new(&PinMap::default()),
            battery: SimulatedBattery::new(0),
            settle: Duration::ZERO,
            engagements: Vec::new(),
        }
    }

    /// Create and initialize a driver in one step.
    pub fn with_config(config: &HalConfig) -> Result<Self, HalError> {
        let mut driver = Self::new();
        driver.init(config)?;
        Ok(driver)
    }

    /// Whether `init()` has run (and `shutdown()` has not).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Set the battery reading, percent.
    pub fn set_charge(&mut self, charge: u8) {
        self.battery.set_charge(charge);
    }

    /// Block or clear the infrared sensor.
    pub fn set_obstacle(&mut self, present: bool) {
        self.signals.set_input(SignalRole::Infrared, present);
    }

    /// Fill or empty the simulated water tank.
    pub fn set_water_sufficient(&mut self, sufficient: bool) {
        self.signals.set_input(SignalRole::WaterLevel, sufficient);
    }

    /// Completed motor engagements, oldest first.
    pub fn engagements(&self) -> &[MotorEngagement] {
        &self.engagements
    }

    /// Forget recorded engagements and pin writes.
    pub fn clear_history(&mut self) {
        self.engagements.clear();
        self.signals.clear_writes();
    }

    /// Digital lines, for pin-level inspection.
    pub fn signals(&self) -> &SignalBank {
        &self.signals
    }

    /// Current level of an output line.
    pub fn output(&self, role: SignalRole) -> bool {
        self.signals.level(role)
    }

    fn ensure_initialized(&self) -> Result<(), HalError> {
        if self.initialized {
            Ok(())
        } else {
            Err(HalError::InitFailed(
                "simulation driver used before init()".to_string(),
            ))
        }
    }

    /// Run one motor: enable, hold for the settle time, then stop every line
    /// the engagement touched. Direction inputs must already be set.
    fn run_motor(&mut self, pwm: SignalRole, inputs: [SignalRole; 2]) {
        self.signals.write(pwm, true);
        self.signals.write(SignalRole::Standby, true);

        if !self.settle.is_zero() {
            std::thread::sleep(self.settle);
        }

        for input in inputs {
            self.signals.write(input, false);
        }
        self.signals.write(pwm, false);
        self.signals.write(SignalRole::Standby, false);

        self.battery.drain();
    }
}

impl Default for SimulationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryMonitor for SimulationDriver {
    fn charge_left(&mut self) -> Result<u8, HalError> {
        self.ensure_initialized()
            .map_err(|e| HalError::SensorUnavailable(e.to_string()))?;
        Ok(self.battery.charge())
    }
}

impl ObstacleSensor for SimulationDriver {
    fn obstacle_detected(&mut self) -> Result<bool, HalError> {
        self.ensure_initialized()
            .map_err(|e| HalError::SensorUnavailable(e.to_string()))?;
        Ok(self.signals.level(SignalRole::Infrared))
    }
}

impl WaterLevelSensor for SimulationDriver {
    fn water_sufficient(&mut self) -> Result<bool, HalError> {
        self.ensure_initialized()
            .map_err(|e| HalError::SensorUnavailable(e.to_string()))?;
        Ok(self.signals.level(SignalRole::WaterLevel))
    }
}

impl PowerIndicators for SimulationDriver {
    fn set_cleaning_system(&mut self, on: bool) -> Result<(), HalError> {
        self.ensure_initialized()?;
        self.signals.write(SignalRole::CleaningSystem, on);
        Ok(())
    }

    fn set_recharge_led(&mut self, on: bool) -> Result<(), HalError> {
        self.ensure_initialized()?;
        self.signals.write(SignalRole::RechargeLed, on);
        Ok(())
    }
}

impl MotionActuator for SimulationDriver {
    fn drive_forward(&mut self) -> Result<(), HalError> {
        self.ensure_initialized()
            .map_err(|e| HalError::ActuatorFault(e.to_string()))?;

        // Clockwise.
        self.signals.write(SignalRole::WheelIn1, true);
        self.signals.write(SignalRole::WheelIn2, false);
        self.run_motor(
            SignalRole::WheelPwm,
            [SignalRole::WheelIn1, SignalRole::WheelIn2],
        );

        self.engagements.push(MotorEngagement::Wheel);
        debug!("Wheel motor engaged (settle {:?})", self.settle);
        Ok(())
    }

    fn rotate(&mut self, direction: RotationDirection) -> Result<(), HalError> {
        self.ensure_initialized()
            .map_err(|e| HalError::ActuatorFault(e.to_string()))?;

        let left = direction == RotationDirection::Left;
        self.signals.write(SignalRole::RotationIn1, left);
        self.signals.write(SignalRole::RotationIn2, !left);
        self.run_motor(
            SignalRole::RotationPwm,
            [SignalRole::RotationIn1, SignalRole::RotationIn2],
        );

        self.engagements.push(MotorEngagement::Rotation(direction));
        debug!("Rotation motor engaged towards {} (settle {:?})", direction, self.settle);
        Ok(())
    }
}

impl RobotHal for SimulationDriver {
    fn name(&self) -> &'static str {
        self.name
    }

    fn version(&self) -> &'static str {
        self.version
    }

    fn init(&mut self, config: &HalConfig) -> Result<(), HalError> {
        config.validate()?;

        let sim = &config.simulation;
        info!(
            "Initializing simulation driver: charge {}%, obstacle {}, water {}, settle {:?}",
            sim.initial_charge,
            sim.obstacle,
            if sim.water_sufficient { "ok" } else { "low" },
            config.settle_duration()
        );

        self.signals = SignalBank::new(&config.pins);
        self.signals.set_input(SignalRole::Infrared, sim.obstacle);
        self.signals.set_input(SignalRole::WaterLevel, sim.water_sufficient);
        self.battery = SimulatedBattery::from_config(sim);
        self.settle = config.settle_duration();
        self.engagements.clear();
        self.initialized = true;

        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), HalError> {
        info!(
            "Shutting down simulation driver after {} engagements",
            self.engagements.len()
        );
        self.signals.release_outputs();
        self.initialized = false;
        Ok(())
    }
}
