//! Minesweeper rules: board generation, reveal with flood fill, and win/loss detection.
//!
//! [`GameController`] is the entry point for frontends. It owns one [`GameState`] at a time,
//! applies [`PlayerInput`] to it and reports changes to a [`GameObserver`].

pub use board::*;
pub use config::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod config;
mod controller;
mod engine;
mod error;
mod generator;
mod tile;
mod types;
