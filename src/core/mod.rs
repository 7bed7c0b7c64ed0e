//! Core types: players, board, state, move reports, configuration, errors.
//!
//! These are plain values with no rules attached. The transition logic that
//! moves stones around lives in `games::kalah`.

pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::Player;
pub use board::{
    Board, BOARD_SIZE, DEFAULT_STONES_PER_PIT, MAX_TOTAL_STONES, PITS_PER_SIDE, PLAYER_ONE_STORE,
    PLAYER_TWO_STORE,
};
pub use config::RulesConfig;
pub use action::{Capture, MoveOutcome};
pub use state::{GameState, GameStatus};
pub use error::{ConfigError, MoveError, StateError};
