use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells with neighbor counts derived from its mine layout.
///
/// Cells are stored row-major, so the flat offset of `(x, y)` is `y * width + x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from a row-major mask (`true` marks a mine) and computes every neighbor count.
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let coords = (col as Coord, row as Coord);
            let kind = if mine_mask[[row, col]] {
                CellKind::Mine
            } else {
                CellKind::Empty
            };
            let count = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::new(kind, count as u8)
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        Self { cells, mine_count }
    }

    /// Builds a board with mines at exactly `mine_coords`, duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(grid_shape(size));

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords)
            .then(|| self.cells[coords.to_nd_index()])
    }

    /// In-bounds neighbors of `coords`, in compass order starting top-left.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((col as Coord, row as Coord), cell))
    }

    pub fn count_state(&self, state: CellState) -> CellCount {
        self.cells.iter().filter(|cell| cell.state() == state).count() as CellCount
    }

    /// Reveals `start` and spreads through every connected zero-count cell.
    ///
    /// Propagation stops at numbered cells, which are revealed but not expanded. Returns `true` only
    /// when `start` itself was hidden, in bounds and not a mine.
    pub fn flood_reveal(&mut self, start: Coord2) -> bool {
        match self.get(start) {
            Some(cell) if cell.is_hidden() && !cell.is_mine() => {}
            _ => return false,
        }

        let mut to_visit = vec![start];
        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_mine() || !cell.reveal() {
                continue;
            }
            let count = cell.neighbor_mine_count();
            log::trace!("Flood revealed cell at {:?}, mine count: {}", coords, count);

            if count == 0 {
                let cells = &self.cells;
                to_visit.extend(
                    cells
                        .iter_neighbors(coords)
                        .filter(|&pos| cells[pos.to_nd_index()].is_hidden()),
                );
            }
        }

        true
    }

    pub(crate) fn explode(&mut self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()].explode()
    }

    /// Reveals every hidden cell matching `predicate`.
    pub(crate) fn reveal_where(&mut self, predicate: impl Fn(Cell) -> bool) {
        for cell in self.cells.iter_mut() {
            if predicate(*cell) {
                cell.reveal();
            }
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        assert!(
            self.contains(coords),
            "coordinates {coords:?} outside board of size {:?}",
            self.size()
        );
        &self.cells[coords.to_nd_index()]
    }
}
