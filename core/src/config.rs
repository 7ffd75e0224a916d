use serde::{Deserialize, Serialize};

use crate::*;

/// Inclusive limits on board width and height that a [`GameConfig`] must respect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min: Coord2,
    pub max: Coord2,
}

impl GridBounds {
    /// 9 to 30 columns, 9 to 16 rows.
    pub const CLASSIC: Self = Self {
        min: (9, 9),
        max: (30, 16),
    };

    /// Anything from a single cell up to the largest representable grid.
    pub const UNRESTRICTED: Self = Self {
        min: (1, 1),
        max: (Coord::MAX, Coord::MAX),
    };

    pub fn check(&self, (width, height): Coord2) -> core::result::Result<(), ConfigError> {
        let (min_x, min_y) = self.min;
        let (max_x, max_y) = self.max;

        if !(min_x..=max_x).contains(&width) {
            return Err(ConfigError::WidthOutOfRange {
                width,
                min: min_x,
                max: max_x,
            });
        }
        if !(min_y..=max_y).contains(&height) {
            return Err(ConfigError::HeightOutOfRange {
                height,
                min: min_y,
                max: max_y,
            });
        }
        Ok(())
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    /// Fixes the mine layout; drawn from system entropy when `None`.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self {
            size,
            mines,
            seed: None,
        }
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub const fn beginner() -> Self {
        Self::new((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new((30, 16), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Checks the dimensions against `bounds` and requires at least one mine and one safe cell.
    pub fn validate(&self, bounds: &GridBounds) -> Result<()> {
        bounds.check(self.size)?;
        check_mine_count(self.mines, self.total_cells())?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

pub(crate) fn check_mine_count(
    mines: CellCount,
    cells: CellCount,
) -> core::result::Result<(), ConfigError> {
    if mines == 0 {
        Err(ConfigError::NoMines)
    } else if mines >= cells {
        Err(ConfigError::TooManyMines { mines, cells })
    } else {
        Ok(())
    }
}
