use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Running -> Won
/// - Running -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Running,
    Won,
    Lost,
}

impl Phase {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    /// Accepted as input but not implemented, always rejected with [`GameError::UnsupportedAction`].
    Flag,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub pos: Coord2,
    pub action: Action,
}

impl PlayerInput {
    pub const fn reveal(pos: Coord2) -> Self {
        Self {
            pos,
            action: Action::Reveal,
        }
    }

    pub const fn flag(pos: Coord2) -> Self {
        Self {
            pos,
            action: Action::Flag,
        }
    }
}

/// Outcome of applying a single input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl MoveOutcome {
    /// Whether the grid changed and observers should redraw
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// A single game from its first move to win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    phase: Phase,
    seed: Option<u64>,
}

impl GameState {
    /// Validates `config` against `bounds` and lays out a fresh board.
    pub fn new(config: &GameConfig, bounds: &GridBounds) -> Result<Self> {
        config.validate(bounds)?;

        let generator = match config.seed {
            Some(seed) => ShuffleGenerator::new(seed),
            None => ShuffleGenerator::from_entropy(),
        };
        let seed = generator.seed();
        log::debug!(
            "New {}x{} game with {} mines, seed: {}",
            config.size.0,
            config.size.1,
            config.mines,
            seed
        );

        let board = generator.generate(config.size, config.mines)?;
        Ok(Self {
            board,
            phase: Phase::Running,
            seed: Some(seed),
        })
    }

    /// Starts a game on a prepared board, e.g. one built with [`Board::from_mine_coords`].
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            phase: Phase::Running,
            seed: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// The seed the board was generated from, `None` for prepared boards.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn exploded_at(&self) -> Option<Coord2> {
        self.board
            .cells()
            .find(|(_, cell)| cell.is_exploded())
            .map(|(coords, _)| coords)
    }

    /// Applies one player input, running the termination check whenever the grid changed.
    pub fn apply(&mut self, input: PlayerInput) -> Result<MoveOutcome> {
        self.check_running()?;
        let coords = self.board.validate_coords(input.pos)?;

        match input.action {
            Action::Reveal => Ok(self.reveal(coords)),
            Action::Flag => self.flag(coords),
        }
    }

    fn reveal(&mut self, coords: Coord2) -> MoveOutcome {
        let changed = if self.board[coords].is_mine() {
            log::debug!("Hit mine at {:?}", coords);
            self.board.explode(coords)
        } else {
            self.board.flood_reveal(coords)
        };

        if !changed {
            return MoveOutcome::NoChange;
        }

        self.update_phase();
        match self.phase {
            Phase::Running => MoveOutcome::Revealed,
            Phase::Won => MoveOutcome::Won,
            Phase::Lost => MoveOutcome::HitMine,
        }
    }

    fn flag(&self, coords: Coord2) -> Result<MoveOutcome> {
        log::warn!("Flagging is not supported, ignored at {:?}", coords);
        Err(GameError::UnsupportedAction)
    }

    /// Loss takes priority: an exploded cell ends the game even if every safe cell is open.
    fn update_phase(&mut self) {
        if self.board.cells().any(|(_, cell)| cell.is_exploded()) {
            // the exploded cell keeps its state, only hidden mines are shown
            self.board.reveal_where(Cell::is_mine);
            self.phase = Phase::Lost;
            log::debug!("Game lost");
            return;
        }

        let won = self
            .board
            .cells()
            .all(|(_, cell)| cell.is_revealed() ^ cell.is_mine());
        if won {
            self.board.reveal_where(|_| true);
            self.phase = Phase::Won;
            log::debug!("Game won");
        }
    }

    fn check_running(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> GameState {
        GameState::from_board(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn revealing_the_only_safe_cell_wins() {
        let mut game = game((2, 1), &[(1, 0)]);

        let outcome = game.apply(PlayerInput::reveal((0, 0))).unwrap();

        assert_eq!(outcome, MoveOutcome::Won);
        assert_eq!(game.board()[(0, 0)].neighbor_mine_count(), 1);
        assert_eq!(game.board()[(1, 0)].state(), CellState::Revealed);
    }

    #[test]
    fn revealing_a_mine_loses() {
        let mut game = game((2, 1), &[(1, 0)]);

        let outcome = game.apply(PlayerInput::reveal((1, 0))).unwrap();

        assert_eq!(outcome, MoveOutcome::HitMine);
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.exploded_at(), Some((1, 0)));
        assert_eq!(game.board()[(0, 0)].state(), CellState::Hidden);
    }

    #[test]
    fn numbered_cell_reveals_alone() {
        let mut game = game((3, 1), &[(1, 0)]);

        let outcome = game.apply(PlayerInput::reveal((0, 0))).unwrap();

        assert_eq!(outcome, MoveOutcome::Revealed);
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.board().count_state(CellState::Revealed), 1);
    }

    #[test]
    fn hitting_mine_reveals_other_mines() {
        let mines = [(0, 0), (3, 3), (2, 0)];
        let mut game = game((4, 4), &mines);

        let outcome = game.apply(PlayerInput::reveal((3, 3))).unwrap();

        assert_eq!(outcome, MoveOutcome::HitMine);
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.board()[(3, 3)].state(), CellState::Exploded);
        assert_eq!(game.board()[(0, 0)].state(), CellState::Revealed);
        assert_eq!(game.board()[(2, 0)].state(), CellState::Revealed);
        assert_eq!(game.board()[(1, 1)].state(), CellState::Hidden);
        assert_eq!(game.board().count_state(CellState::Exploded), 1);
    }

    #[test]
    fn clearing_all_safe_cells_wins_and_reveals_everything() {
        let mut game = game((3, 3), &[(2, 2)]);

        let outcome = game.apply(PlayerInput::reveal((0, 0))).unwrap();

        assert_eq!(outcome, MoveOutcome::Won);
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.board().count_state(CellState::Revealed), 9);
        assert_eq!(game.board()[(2, 2)].state(), CellState::Revealed);
    }

    #[test]
    fn win_needs_every_safe_cell() {
        let mut game = game((3, 1), &[(1, 0)]);

        game.apply(PlayerInput::reveal((0, 0))).unwrap();
        assert_eq!(game.phase(), Phase::Running);
        assert!(!game.board().cells().all(|(_, c)| c.is_revealed() ^ c.is_mine()));

        let outcome = game.apply(PlayerInput::reveal((2, 0))).unwrap();
        assert_eq!(outcome, MoveOutcome::Won);
        assert!(game.board().cells().all(|(_, c)| c.is_revealed()));
    }

    #[test]
    fn repeated_reveal_is_no_change() {
        let mut game = game((3, 1), &[(2, 0)]);

        assert_eq!(
            game.apply(PlayerInput::reveal((1, 0))).unwrap(),
            MoveOutcome::Revealed
        );
        let before = game.clone();
        assert_eq!(
            game.apply(PlayerInput::reveal((1, 0))).unwrap(),
            MoveOutcome::NoChange
        );
        assert_eq!(game, before);
    }

    #[test]
    fn terminal_phase_rejects_input() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.apply(PlayerInput::reveal((0, 0))).unwrap();
        let finished = game.clone();

        assert_eq!(
            game.apply(PlayerInput::reveal((1, 1))),
            Err(GameError::AlreadyEnded)
        );
        assert_eq!(
            game.apply(PlayerInput::flag((1, 1))),
            Err(GameError::AlreadyEnded)
        );
        assert_eq!(game, finished);
    }

    #[test]
    fn flag_is_unsupported() {
        let mut game = game((2, 2), &[(0, 0)]);
        let before = game.clone();

        assert_eq!(
            game.apply(PlayerInput::flag((0, 0))),
            Err(GameError::UnsupportedAction)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn outside_coords_are_rejected() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(
            game.apply(PlayerInput::reveal((2, 0))),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(game.board().count_state(CellState::Hidden), 4);
    }

    #[test]
    fn corner_reveal_cascades_through_zero_region() {
        // a wall of mines down column 8, columns 0..=6 are zero and column 7 is numbered
        let wall: Vec<Coord2> = (0..16).map(|y| (8, y)).collect();
        let mut game = game((16, 16), &wall);

        let outcome = game.apply(PlayerInput::reveal((0, 0))).unwrap();

        assert_eq!(outcome, MoveOutcome::Revealed);
        for (coords, cell) in game.board().cells() {
            assert_eq!(cell.is_revealed(), coords.0 <= 7, "at {coords:?}");
        }
        assert_eq!(game.board().count_state(CellState::Revealed), 8 * 16);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let config = GameConfig::beginner().with_seed(42);
        let first = GameState::new(&config, &GridBounds::CLASSIC).unwrap();
        let second = GameState::new(&config, &GridBounds::CLASSIC).unwrap();

        assert_eq!(first.seed(), Some(42));
        assert_eq!(first, second);
        assert_eq!(first.board().mine_count(), 10);
    }

    #[test]
    fn unseeded_game_records_seed() {
        let game = GameState::new(&GameConfig::beginner(), &GridBounds::CLASSIC).unwrap();
        let seed = game.seed().unwrap();

        let replay = GameState::new(&GameConfig::beginner().with_seed(seed), &GridBounds::CLASSIC)
            .unwrap();
        assert_eq!(replay.board(), game.board());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(matches!(
            GameState::new(&GameConfig::new((9, 9), 81), &GridBounds::CLASSIC),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines { .. }))
        ));
    }
}
