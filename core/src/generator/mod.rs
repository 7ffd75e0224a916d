use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait BoardGenerator {
    /// Produces a board of `size` holding exactly `mines` mines.
    fn generate(self, size: Coord2, mines: CellCount) -> Result<Board>;
}
