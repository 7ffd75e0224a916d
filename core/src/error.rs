use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Coordinates are outside the grid")]
    OutOfBounds,
    #[error("Action is not supported")]
    UnsupportedAction,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// The rule a rejected [`GameConfig`](crate::GameConfig) violates.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width {width} is outside {min}..={max}")]
    WidthOutOfRange { width: Coord, min: Coord, max: Coord },
    #[error("height {height} is outside {min}..={max}")]
    HeightOutOfRange { height: Coord, min: Coord, max: Coord },
    #[error("at least one mine is required")]
    NoMines,
    #[error("{mines} mines do not leave a safe cell among {cells}")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
