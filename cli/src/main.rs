use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sapper_core::*;
use serde::Serialize;

mod script;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::beginner(),
            Self::Intermediate => GameConfig::intermediate(),
            Self::Expert => GameConfig::expert(),
        }
    }
}

/// Replays a move script against a fresh game and prints the final state as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board to start from
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    preset: Preset,

    /// Override the preset width
    #[arg(long)]
    width: Option<Coord>,

    /// Override the preset height
    #[arg(long)]
    height: Option<Coord>,

    /// Override the preset mine count
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Allow any board size instead of the classic 9x9 to 30x16 range
    #[arg(long)]
    unrestricted: bool,

    /// Move script, stdin when omitted
    script: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let preset = self.preset.config();
        GameConfig {
            size: (
                self.width.unwrap_or(preset.size.0),
                self.height.unwrap_or(preset.size.1),
            ),
            mines: self.mines.unwrap_or(preset.mines),
            seed: self.seed,
        }
    }

    fn bounds(&self) -> GridBounds {
        if self.unrestricted {
            GridBounds::UNRESTRICTED
        } else {
            GridBounds::CLASSIC
        }
    }
}

/// Logs every notification the controller emits.
#[derive(Debug, Default)]
struct ReplayLog {
    redraws: usize,
}

impl GameObserver for ReplayLog {
    fn config_updated(&mut self, config: &GameConfig) {
        log::info!("New game: {:?}", config);
    }

    fn grid_changed(&mut self, _config: &GameConfig, state: &GameState) {
        self.redraws += 1;
        log::info!(
            "Grid changed ({} revealed), phase: {:?}",
            state.board().count_state(CellState::Revealed),
            state.phase()
        );
    }
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a GameConfig,
    seed: Option<u64>,
    phase: Phase,
    moves: usize,
    redraws: usize,
    state: &'a GameState,
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Could not read script {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Could not read script from stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let inputs = script::parse(&read_script(args.script.as_deref())?)
        .context("Could not parse script")?;

    let mut controller =
        GameController::with_config(args.bounds(), args.game_config(), ReplayLog::default())
            .context("Could not start game")?;
    log::debug!("seed: {:?}", controller.state().seed());

    for &input in &inputs {
        controller.submit_input(input);
    }

    let report = Report {
        config: controller.config(),
        seed: controller.state().seed(),
        phase: controller.state().phase(),
        moves: inputs.len(),
        redraws: controller.observer().redraws,
        state: controller.state(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
