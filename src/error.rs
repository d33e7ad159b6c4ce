use std::io;

use thiserror::Error;

use crate::snake::Point;

/// Startup configuration the game refuses to run with.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid speed `{0}`: expected a whole number from 1 to 10")]
    InvalidSpeed(String),

    #[error("input device `{0}` is not implemented yet")]
    UnsupportedInput(&'static str),

    #[error("output device `{0}` is not supported by this build")]
    UnsupportedOutput(&'static str),
}

/// Reasons a starting layout cannot become a board.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum BoardError {
    #[error("board must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("snake segment {index} at {point} lies outside the board")]
    SegmentOutOfBounds { index: usize, point: Point },

    #[error("snake segment {index} at {point} is not adjacent to the segment before it")]
    DetachedSegment { index: usize, point: Point },

    #[error("snake overlaps itself at {0}")]
    OverlappingSegments(Point),

    #[error("food at {0} lies outside the board")]
    FoodOutOfBounds(Point),

    #[error("food at {0} is placed on the snake")]
    FoodOnSnake(Point),
}

/// Failures reading or writing the score book.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score book I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score book is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Anything that stops the program before or during a game.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid starting layout: {0}")]
    Board(#[from] BoardError),

    #[error("failed to start logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
