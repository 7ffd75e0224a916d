use serde::{Deserialize, Serialize};

/// What a cell holds, fixed when the board is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Mine,
}

/// Player-visible state of a cell.
///
/// Only ever moves forward: `Hidden -> Revealed` or `Hidden -> Exploded`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Exploded,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    state: CellState,
    neighbor_mine_count: u8,
}

impl Cell {
    pub(crate) const fn new(kind: CellKind, neighbor_mine_count: u8) -> Self {
        Self {
            kind,
            state: CellState::Hidden,
            neighbor_mine_count,
        }
    }

    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    /// Mines among the up to 8 adjacent cells.
    pub const fn neighbor_mine_count(self) -> u8 {
        self.neighbor_mine_count
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.state, CellState::Revealed)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.state, CellState::Hidden)
    }

    pub const fn is_exploded(self) -> bool {
        matches!(self.state, CellState::Exploded)
    }

    /// Moves a hidden cell to `Revealed`, returns whether it changed.
    pub(crate) fn reveal(&mut self) -> bool {
        if self.is_hidden() {
            self.state = CellState::Revealed;
            true
        } else {
            false
        }
    }

    /// Moves a hidden cell to `Exploded`, returns whether it changed.
    pub(crate) fn explode(&mut self) -> bool {
        if self.is_hidden() {
            self.state = CellState::Exploded;
            true
        } else {
            false
        }
    }
}
