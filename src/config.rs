use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::error::ConfigError;
use crate::input::Direction;
use crate::snake::Point;

/// Logical grid dimensions passed through the game as a named type.
///
/// `width` bounds the row coordinate (`x`) and `height` the column
/// coordinate (`y`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Board used by the classic game.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 11,
    height: 20,
};

/// Head of the starting snake.
pub const INITIAL_SNAKE_HEAD: Point = Point::new(10, 8);

/// Segment count of the starting snake.
pub const INITIAL_SNAKE_LENGTH: usize = 9;

/// Heading of the starting snake.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Where the first food sits.
pub const INITIAL_FOOD: Point = Point::new(5, 10);

/// Slowest accepted speed, in turns per second.
pub const MIN_SPEED: u8 = 1;

/// Fastest accepted speed, in turns per second.
pub const MAX_SPEED: u8 = 10;

/// Two turns per second.
pub const DEFAULT_SPEED: u8 = 2;

/// Sleep between input polls in the driver loop.
pub const POLL_INTERVAL_MS: u64 = 50;

const APP_DIR_NAME: &str = "retro-snake";
const LOG_FILE_NAME: &str = "retro-snake.log";
const SCORES_FILE_NAME: &str = "scores.json";

/// Game speed in turns per second, always within `MIN_SPEED..=MAX_SPEED`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Speed(u8);

impl Speed {
    /// Validates a raw speed value.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if (MIN_SPEED..=MAX_SPEED).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidSpeed(value.to_string()))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Time between two turns: `1 / speed` seconds.
    #[must_use]
    pub fn turn_interval(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.0))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl FromStr for Speed {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidSpeed(raw.to_owned()))?;
        Self::new(value)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where direction input comes from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum InputDevice {
    Stdin,
    Joystick,
}

/// Where the board is drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputDevice {
    Stdout,
    Lcd,
}

/// Play the classic Snake game from old Nokia phones in a terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Input device.
    #[arg(short, long, value_enum, default_value_t = InputDevice::Stdin)]
    pub input: InputDevice,

    /// Output device.
    #[arg(short, long, value_enum, default_value_t = OutputDevice::Stdout)]
    pub output: OutputDevice,

    /// Turns per second, from 1 to 10.
    #[arg(short, long, default_value_t = Speed::default())]
    pub speed: Speed,

    /// Log file path (defaults to the platform data directory).
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Score book path (defaults to the platform data directory).
    #[arg(long = "scores-file")]
    pub scores_file: Option<PathBuf>,
}

/// Validated runtime settings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Settings {
    pub speed: Speed,
    pub log_file: PathBuf,
    pub scores_file: PathBuf,
}

impl Settings {
    /// Rejects device choices this build cannot drive.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.input == InputDevice::Joystick {
            return Err(ConfigError::UnsupportedInput("joystick"));
        }

        if cli.output == OutputDevice::Lcd {
            return Err(ConfigError::UnsupportedOutput("lcd"));
        }

        Ok(Self {
            speed: cli.speed,
            log_file: cli.log_file.unwrap_or_else(default_log_path),
            scores_file: cli.scores_file.unwrap_or_else(default_scores_path),
        })
    }
}

/// Log file in the platform data directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_file(LOG_FILE_NAME)
}

/// Score book in the platform data directory.
#[must_use]
pub fn default_scores_path() -> PathBuf {
    data_file(SCORES_FILE_NAME)
}

/// Falls back to the working directory on platforms without a data directory.
fn data_file(name: &str) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(name)
}
