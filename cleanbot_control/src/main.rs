//! # cleanbot
//!
//! Runs the cleaning robot against a HAL driver, one command token at a time,
//! printing one status line per command.
//!
//! # Usage
//!
//! ```bash
//! # Simulated run with explicit commands
//! cleanbot f f r f
//!
//! # Commands from stdin, low battery, verbose logging
//! echo "f l f" | cleanbot --charge 8 -v
//!
//! # Config file, JSON logs
//! cleanbot --config /etc/cleanbot/cleanbot.toml --json f
//! ```

use clap::Parser;
use cleanbot_common::config::LogLevel;
use cleanbot_common::hal::driver::RobotHal;
use cleanbot_control::config::{RobotConfig, load_config};
use cleanbot_control::state::CleaningSystemManager;
use cleanbot_control::{CleaningRobot, RobotError};
use cleanbot_hal::DriverRegistry;
use std::io::BufRead;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// cleanbot: grid cleaning robot command executor
#[derive(Parser, Debug)]
#[command(name = "cleanbot")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Executes motion commands on a grid cleaning robot")]
#[command(long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// HAL driver to load (overrides [hal].driver).
    #[arg(short, long)]
    driver: Option<String>,

    /// Initial simulated battery charge in percent.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    charge: Option<u8>,

    /// Start with the simulated infrared sensor blocked.
    #[arg(long)]
    obstacle: bool,

    /// Actuator settle time in milliseconds (overrides [hal].actuator_settle_ms).
    #[arg(long, value_name = "MS")]
    settle_ms: Option<u64>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,

    /// Command tokens (f, l, r). Read from stdin when omitted.
    commands: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let loaded = match args.config {
        Some(ref path) => load_config(path),
        None => Ok(RobotConfig::default()),
    };
    let log_level = loaded
        .as_ref()
        .map(|config| config.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);

    info!("cleanbot v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("FATAL: failed to load configuration: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, config) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("cleanbot shutdown complete");
}

fn run(args: &Args, mut config: RobotConfig) -> Result<(), Box<dyn std::error::Error>> {
    apply_overrides(args, &mut config);
    config.validate()?;

    let registry = DriverRegistry::with_builtin();
    let mut hal = registry.create_driver(&config.hal.driver)?;
    hal.init(&config.hal)?;
    info!("HAL driver '{}' v{} ready", hal.name(), hal.version());

    let power = CleaningSystemManager::new(config.robot.low_battery_threshold);
    let mut robot = CleaningRobot::new(hal, power);
    robot.initialize();

    let indicators = robot.manage_cleaning_system()?;
    info!(
        "Cleaning system {}, recharge LED {}",
        if indicators.cleaning_system_on { "on" } else { "off" },
        if indicators.recharge_led_on { "on" } else { "off" }
    );

    let result = if args.commands.is_empty() {
        info!("Reading commands from stdin");
        execute_stdin(&mut robot)
    } else {
        execute_all(&mut robot, args.commands.iter().map(String::as_str))
    };

    // Release the outputs even when a command failed.
    robot.shutdown()?;
    result.map_err(Into::into)
}

/// Fold CLI flags into the loaded configuration.
fn apply_overrides(args: &Args, config: &mut RobotConfig) {
    if let Some(ref driver) = args.driver {
        config.hal.driver = driver.clone();
    }
    if let Some(charge) = args.charge {
        config.hal.simulation.initial_charge = charge;
    }
    if args.obstacle {
        config.hal.simulation.obstacle = true;
    }
    if let Some(settle_ms) = args.settle_ms {
        config.hal.actuator_settle_ms = settle_ms;
    }
}

fn execute_stdin(robot: &mut CleaningRobot) -> Result<(), RobotError> {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Stopped reading stdin: {e}");
                break;
            }
        };
        execute_all(robot, line.split_whitespace())?;
    }
    Ok(())
}

/// Execute tokens in order, printing each report. Invalid tokens are skipped.
fn execute_all<'a>(
    robot: &mut CleaningRobot,
    tokens: impl IntoIterator<Item = &'a str>,
) -> Result<(), RobotError> {
    for token in tokens {
        match robot.execute_token(token) {
            Ok(report) => println!("{report}"),
            Err(RobotError::InvalidCommand(token)) => {
                warn!("Skipping invalid command {token:?}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from(configured)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Status lines go to stdout; logs stay on stderr.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
