use crate::*;

/// Receives notifications from a [`GameController`], synchronously and in order.
pub trait GameObserver {
    /// A new game was started with `config`.
    fn config_updated(&mut self, _config: &GameConfig) {}

    /// An input changed the grid and it should be redrawn.
    fn grid_changed(&mut self, _config: &GameConfig, _state: &GameState) {}
}

impl GameObserver for () {}

/// Owns the running game, validates new configurations and routes player input to it.
///
/// Every operation takes `&mut self`, so input is applied one move at a time.
#[derive(Debug)]
pub struct GameController<O = ()> {
    bounds: GridBounds,
    config: GameConfig,
    state: GameState,
    observer: O,
}

impl<O: GameObserver> GameController<O> {
    /// Starts a beginner game within the classic bounds.
    pub fn new(observer: O) -> Self {
        Self::with_config(GridBounds::CLASSIC, GameConfig::default(), observer)
            .expect("default configuration fits the classic bounds")
    }

    /// Starts the first game with `config`, every later configuration is validated against `bounds`.
    pub fn with_config(bounds: GridBounds, config: GameConfig, observer: O) -> Result<Self> {
        let state = GameState::new(&config, &bounds)?;
        Ok(Self {
            bounds,
            config,
            state,
            observer,
        })
    }

    /// Replaces the current game, or keeps it untouched when `config` is invalid.
    pub fn start_new_game(&mut self, config: GameConfig) -> Result<()> {
        let state = GameState::new(&config, &self.bounds)?;
        self.config = config;
        self.state = state;
        self.observer.config_updated(&self.config);
        Ok(())
    }

    /// Applies `input` to the running game.
    ///
    /// Input after the game ended, outside the grid or using an unsupported action is ignored. The
    /// observer hears about the input only when the grid changed.
    pub fn submit_input(&mut self, input: PlayerInput) {
        match self.state.apply(input) {
            Ok(outcome) if outcome.has_update() => {
                log::debug!("{:?} -> {:?}", input, outcome);
                self.observer.grid_changed(&self.config, &self.state);
            }
            Ok(_) => {}
            Err(err) => log::debug!("Ignoring {:?}: {}", input, err),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
