//! Kalah, the common Western Mancala variant.
//!
//! - Two players, six pits each, one store each
//! - Four stones per pit at the start (configurable)
//! - Sow counter-clockwise, skipping the opponent's store
//! - Last stone in your own store: move again
//! - Last stone in an empty pit of yours: capture it and the pit across
//! - The game ends when either side runs out of stones
//!
//! `reset` and `apply_move` are shorthands for the standard configuration.

mod game;

pub use game::Kalah;

use crate::core::GameState;
use crate::rules::RulesEngine;

/// The starting position of a standard game.
///
/// ```
/// let state = rust_mancala::reset();
/// assert_eq!(state.board().cells(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
/// ```
#[must_use]
pub fn reset() -> GameState {
    Kalah::default().reset()
}

/// Apply a move under the standard rules.
///
/// Illegal moves return `state` unchanged.
///
/// ```
/// let state = rust_mancala::reset();
///
/// let next = rust_mancala::apply_move(&state, 3); // Player 2's pit
/// assert_eq!(next, state);
///
/// let next = rust_mancala::apply_move(&state, 9);
/// assert_eq!(next.board()[13], 1);
/// ```
#[must_use]
pub fn apply_move(state: &GameState, pit: usize) -> GameState {
    Kalah::default().apply_move(state, pit)
}
