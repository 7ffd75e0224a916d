use ndarray::Array2;

use super::*;
use crate::config::check_mine_count;

/// Places the mines at the front of a flat buffer and Fisher–Yates shuffles it, giving a uniform
/// choice among all layouts with the requested mine count.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds the generator from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for ShuffleGenerator {
    fn generate(self, size: Coord2, mines: CellCount) -> Result<Board> {
        use rand::prelude::*;

        let total_cells = mult(size.0, size.1);
        check_mine_count(mines, total_cells)?;

        let mut layout: Vec<bool> = (0..total_cells).map(|i| i < mines).collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let len = layout.len();
        for i in 0..len {
            let j = rng.random_range(i..len);
            layout.swap(i, j);
        }

        let width = usize::from(size.0);
        let mine_mask = Array2::from_shape_fn(grid_shape(size), |(row, col)| {
            layout[row * width + col]
        });
        let board = Board::from_mine_mask(&mine_mask);

        // double check mine count
        if board.mine_count() != mines {
            log::warn!(
                "Generated board mine count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                mines
            );
        }
        Ok(board)
    }
}
